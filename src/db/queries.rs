use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::schedule::Schedule;
use crate::models::time_entry::TimeEntry;
use crate::models::user::User;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use uuid::Uuid;

fn conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn get_uuid(row: &Row, col: &str) -> Result<Uuid> {
    let s: String = row.get(col)?;
    Uuid::parse_str(&s).map_err(|_| conversion_err(AppError::InvalidId(s)))
}

fn get_timestamp(row: &Row, col: &str) -> Result<DateTime<Local>> {
    let s: String = row.get(col)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_err(AppError::InvalidDate(s)))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| conversion_err(AppError::InvalidDate(s)))
}

fn get_time(row: &Row, col: &str) -> Result<NaiveTime> {
    let s: String = row.get(col)?;
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| conversion_err(AppError::InvalidTime(s)))
}

fn get_opt_time(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let s: Option<String> = row.get(col)?;
    match s {
        Some(v) => NaiveTime::parse_from_str(&v, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_err(AppError::InvalidTime(v))),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Time entries
// ---------------------------------------------------------------------------

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_err(AppError::InvalidEntryType(kind_str)))?;

    Ok(TimeEntry {
        id: get_uuid(row, "id")?,
        user_id: get_uuid(row, "user_id")?,
        kind,
        timestamp: get_timestamp(row, "timestamp")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO time_entries (id, user_id, date, timestamp, kind, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.id.to_string(),
            entry.user_id.to_string(),
            entry.local_date().format("%Y-%m-%d").to_string(),
            entry.timestamp.to_rfc3339(),
            entry.kind.to_db_str(),
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// All of a user's punches for one local calendar day, oldest first.
pub fn load_entries_for_day(
    conn: &Connection,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_entries
         WHERE user_id = ?1 AND date = ?2
         ORDER BY timestamp ASC",
    )?;

    let rows = stmt.query_map(
        params![user_id.to_string(), date.format("%Y-%m-%d").to_string()],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One page of a user's punches in [start, end], newest first.
pub fn load_entries_page(
    conn: &Connection,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    limit: u32,
    offset: u64,
) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_entries
         WHERE user_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY timestamp DESC
         LIMIT ?4 OFFSET ?5",
    )?;

    let rows = stmt.query_map(
        params![
            user_id.to_string(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            limit,
            offset as i64,
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_entries_in_range(
    conn: &Connection,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<u64> {
    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM time_entries
         WHERE user_id = ?1 AND date >= ?2 AND date <= ?3",
        params![
            user_id.to_string(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        |row| row.get(0),
    )?;
    Ok(total as u64)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: get_uuid(row, "id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_user(conn: &Connection, user: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![user.id.to_string(), user.name, user.created_at],
    )?;
    Ok(())
}

pub fn find_user_by_name(conn: &Connection, name: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT * FROM users WHERE name = ?1",
            params![name],
            map_user_row,
        )
        .optional()?;
    Ok(user)
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Resolve a set of user ids in one query (IN with generated placeholders).
pub fn find_users_by_ids(conn: &Connection, ids: &[Uuid]) -> AppResult<Vec<User>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let id_strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let placeholders = vec!["?"; id_strings.len()].join(",");
    let sql = format!("SELECT * FROM users WHERE id IN ({})", placeholders);

    let params_vec: Vec<&dyn rusqlite::ToSql> = id_strings
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params_vec), map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

pub fn map_schedule_row(row: &Row) -> Result<Schedule> {
    Ok(Schedule {
        id: get_uuid(row, "id")?,
        user_id: get_uuid(row, "user_id")?,
        date: get_date(row, "date")?,
        start_time: get_time(row, "start_time")?,
        end_time: get_time(row, "end_time")?,
        lunch_start: get_opt_time(row, "lunch_start")?,
        lunch_end: get_opt_time(row, "lunch_end")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_schedule(conn: &Connection, schedule: &Schedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedules (id, user_id, date, start_time, end_time, lunch_start, lunch_end, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            schedule.id.to_string(),
            schedule.user_id.to_string(),
            schedule.date_str(),
            schedule.start_time.format("%H:%M").to_string(),
            schedule.end_time.format("%H:%M").to_string(),
            schedule.lunch_start.map(|t| t.format("%H:%M").to_string()),
            schedule.lunch_end.map(|t| t.format("%H:%M").to_string()),
            schedule.created_at,
        ],
    )?;
    Ok(())
}

pub fn find_schedule_by_id(conn: &Connection, id: Uuid) -> AppResult<Option<Schedule>> {
    let schedule = conn
        .query_row(
            "SELECT * FROM schedules WHERE id = ?1",
            params![id.to_string()],
            map_schedule_row,
        )
        .optional()?;
    Ok(schedule)
}

pub fn find_schedule_by_user_date(
    conn: &Connection,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<Schedule>> {
    let schedule = conn
        .query_row(
            "SELECT * FROM schedules WHERE user_id = ?1 AND date = ?2",
            params![user_id.to_string(), date.format("%Y-%m-%d").to_string()],
            map_schedule_row,
        )
        .optional()?;
    Ok(schedule)
}

/// Rewrite the editable window fields of a schedule (id and owner are fixed).
pub fn update_schedule(conn: &Connection, schedule: &Schedule) -> AppResult<()> {
    conn.execute(
        "UPDATE schedules
         SET start_time = ?1, end_time = ?2, lunch_start = ?3, lunch_end = ?4
         WHERE id = ?5",
        params![
            schedule.start_time.format("%H:%M").to_string(),
            schedule.end_time.format("%H:%M").to_string(),
            schedule.lunch_start.map(|t| t.format("%H:%M").to_string()),
            schedule.lunch_end.map(|t| t.format("%H:%M").to_string()),
            schedule.id.to_string(),
        ],
    )?;
    Ok(())
}

pub fn delete_schedule(conn: &Connection, id: Uuid) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM schedules WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(n)
}

/// Schedules ordered by date descending, optionally scoped to one user
/// and/or a date range.
pub fn load_schedules(
    conn: &Connection,
    user_id: Option<Uuid>,
    range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Schedule>> {
    let mut sql = String::from("SELECT * FROM schedules WHERE 1=1");
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(uid) = user_id {
        params_vec.push(uid.to_string());
        sql.push_str(&format!(" AND user_id = ?{}", params_vec.len()));
    }
    if let Some((start, end)) = range {
        params_vec.push(start.format("%Y-%m-%d").to_string());
        sql.push_str(&format!(" AND date >= ?{}", params_vec.len()));
        params_vec.push(end.format("%Y-%m-%d").to_string());
        sql.push_str(&format!(" AND date <= ?{}", params_vec.len()));
    }
    sql.push_str(" ORDER BY date DESC, created_at DESC");

    let to_sql: Vec<&dyn rusqlite::ToSql> = params_vec
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(to_sql), map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
