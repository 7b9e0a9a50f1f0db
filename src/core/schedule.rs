use crate::db::queries::{
    delete_schedule, find_schedule_by_id, find_schedule_by_user_date, find_users_by_ids,
    insert_schedule, load_schedules, update_schedule,
};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{Schedule, SchedulePatch};
use crate::utils::time::{minutes_of_day, parse_optional_time, parse_time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Check a proposed work window for internal consistency, reasoning in
/// minutes since midnight:
///
/// - start must be earlier than end (midnight-crossing shifts are invalid)
/// - when both lunch fields are given, the lunch window must be ordered and
///   lie strictly inside the work window, not touching either boundary
///
/// Pure predicate: callers handle persistence and per-day uniqueness.
pub fn validate_window(
    start: NaiveTime,
    end: NaiveTime,
    lunch_start: Option<NaiveTime>,
    lunch_end: Option<NaiveTime>,
) -> AppResult<()> {
    let s = minutes_of_day(start);
    let e = minutes_of_day(end);

    if s >= e {
        return Err(AppError::InvalidWindow(
            "start time must be earlier than end time".to_string(),
        ));
    }

    if let (Some(ls), Some(le)) = (lunch_start, lunch_end) {
        let ls = minutes_of_day(ls);
        let le = minutes_of_day(le);

        if ls >= le {
            return Err(AppError::InvalidWindow(
                "lunch start must be earlier than lunch end".to_string(),
            ));
        }
        if ls <= s || le >= e {
            return Err(AppError::InvalidWindow(
                "lunch window must lie strictly inside the work window".to_string(),
            ));
        }
    }

    Ok(())
}

/// The stock 8h preset offered when no times are given on the CLI.
pub fn default_window() -> (NaiveTime, NaiveTime, Option<NaiveTime>, Option<NaiveTime>) {
    (
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0),
        NaiveTime::from_hms_opt(13, 0, 0),
    )
}

pub fn create_schedule(
    conn: &Connection,
    user_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    lunch_start: Option<NaiveTime>,
    lunch_end: Option<NaiveTime>,
) -> AppResult<Schedule> {
    validate_window(start_time, end_time, lunch_start, lunch_end)?;

    if find_schedule_by_user_date(conn, user_id, date)?.is_some() {
        return Err(AppError::DuplicateSchedule(
            date.format("%Y-%m-%d").to_string(),
        ));
    }

    let schedule = Schedule::new(user_id, date, start_time, end_time, lunch_start, lunch_end);
    insert_schedule(conn, &schedule)?;
    Ok(schedule)
}

/// Apply a partial edit: absent patch fields keep the stored value, and the
/// merged window is re-validated as a whole before anything is written.
pub fn edit_schedule(conn: &Connection, id: Uuid, patch: &SchedulePatch) -> AppResult<Schedule> {
    let mut schedule = find_schedule_by_id(conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("schedule {}", id)))?;

    if let Some(t) = patch.start_time {
        schedule.start_time = t;
    }
    if let Some(t) = patch.end_time {
        schedule.end_time = t;
    }
    if let Some(t) = patch.lunch_start {
        schedule.lunch_start = Some(t);
    }
    if let Some(t) = patch.lunch_end {
        schedule.lunch_end = Some(t);
    }

    validate_window(
        schedule.start_time,
        schedule.end_time,
        schedule.lunch_start,
        schedule.lunch_end,
    )?;

    update_schedule(conn, &schedule)?;
    Ok(schedule)
}

pub fn remove_schedule(conn: &Connection, id: Uuid) -> AppResult<()> {
    if find_schedule_by_id(conn, id)?.is_none() {
        return Err(AppError::NotFound(format!("schedule {}", id)));
    }
    delete_schedule(conn, id)?;
    Ok(())
}

pub fn list_user_schedules(
    conn: &Connection,
    user_id: Option<Uuid>,
    range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Schedule>> {
    load_schedules(conn, user_id, range)
}

/// One line of a bulk-schedule file. Times stay strings here so the file
/// format matches the CLI's HH:MM convention.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkScheduleItem {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
}

/// Create many schedules at once.
///
/// All referenced users must exist, otherwise the whole batch fails before
/// any insert. Items whose (user, date) already has a schedule are skipped
/// silently rather than failing the batch. The two policies differ on
/// purpose; do not unify them.
pub fn bulk_create_schedules(
    conn: &Connection,
    items: &[BulkScheduleItem],
) -> AppResult<Vec<Schedule>> {
    let unique_ids: Vec<Uuid> = items
        .iter()
        .map(|i| i.user_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let users = find_users_by_ids(conn, &unique_ids)?;
    if users.len() != unique_ids.len() {
        let known: HashSet<Uuid> = users.iter().map(|u| u.id).collect();
        let missing: Vec<String> = unique_ids
            .iter()
            .filter(|id| !known.contains(id))
            .map(|id| id.to_string())
            .collect();
        return Err(AppError::UnknownUser(missing.join(", ")));
    }

    let mut created = Vec::new();

    for item in items {
        let start = parse_time(&item.start_time)?;
        let end = parse_time(&item.end_time)?;
        let lunch_start = parse_optional_time(item.lunch_start.as_ref())?;
        let lunch_end = parse_optional_time(item.lunch_end.as_ref())?;

        validate_window(start, end, lunch_start, lunch_end)?;

        if find_schedule_by_user_date(conn, item.user_id, item.date)?.is_some() {
            continue;
        }

        let schedule = Schedule::new(item.user_id, item.date, start, end, lunch_start, lunch_end);
        insert_schedule(conn, &schedule)?;
        created.push(schedule);
    }

    Ok(created)
}
