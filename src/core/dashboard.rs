use crate::db::queries::{find_schedule_by_user_date, load_entries_for_day};
use crate::errors::AppResult;
use crate::models::dashboard::{DashboardSnapshot, DaySlots, WorkStatus, WorkingHours};
use crate::models::schedule::Schedule;
use chrono::{DateTime, Local};
use rusqlite::Connection;
use uuid::Uuid;

/// Fallback expected workday when no schedule exists for the date: 8 hours.
const DEFAULT_EXPECTED_MINUTES: i64 = 480;

fn minutes_between(from: DateTime<Local>, to: DateTime<Local>) -> f64 {
    let diff = (to - from).num_milliseconds() as f64 / 60_000.0;
    diff.max(0.0)
}

/// Worked / remaining / expected minutes for one day's slots.
///
/// Segments are accumulated as fractional minutes and rounded once at the
/// end, matching the reporting granularity without losing sub-minute time
/// across the lunch split. `now` only matters while the day is still open
/// (no OUT, or out at lunch).
pub fn working_hours(
    slots: &DaySlots,
    schedule: Option<&Schedule>,
    now: DateTime<Local>,
) -> WorkingHours {
    let mut worked = 0.0;

    if let Some(check_in) = slots.check_in {
        let work_end = slots.check_out.unwrap_or(now);

        match slots.lunch_out {
            Some(lunch_out) => {
                worked += minutes_between(check_in, lunch_out);
                // still at lunch: the afternoon segment does not exist yet
                if let Some(lunch_in) = slots.lunch_in {
                    worked += minutes_between(lunch_in, work_end);
                }
            }
            None => {
                worked = minutes_between(check_in, work_end);
            }
        }
    }

    let expected_total = schedule
        .map(Schedule::expected_minutes)
        .unwrap_or(DEFAULT_EXPECTED_MINUTES);

    let remaining = (expected_total as f64 - worked).max(0.0);

    WorkingHours {
        worked: worked.round() as i64,
        remaining: remaining.round() as i64,
        expected_total,
    }
}

/// Coarse day status, evaluated in priority order.
pub fn work_status(slots: &DaySlots) -> WorkStatus {
    if slots.check_in.is_none() {
        return WorkStatus::NotStarted;
    }
    if slots.check_out.is_some() {
        return WorkStatus::Finished;
    }
    if slots.lunch_out.is_some() && slots.lunch_in.is_none() {
        return WorkStatus::Lunch;
    }
    WorkStatus::Working
}

/// Today's snapshot for a user: pure derivation over the day's entries and
/// schedule, nothing is written.
pub fn compute_dashboard(
    conn: &Connection,
    user_id: Uuid,
    now: DateTime<Local>,
) -> AppResult<DashboardSnapshot> {
    let today = now.date_naive();

    let entries = load_entries_for_day(conn, user_id, today)?;
    let schedule = find_schedule_by_user_date(conn, user_id, today)?;

    let slots = DaySlots::from_entries(&entries);
    let hours = working_hours(&slots, schedule.as_ref(), now);
    let status = work_status(&slots);

    Ok(DashboardSnapshot {
        date: today,
        entries: slots,
        working_hours: hours,
        status,
    })
}
