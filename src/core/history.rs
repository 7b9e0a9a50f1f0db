use crate::db::queries::{count_entries_in_range, load_entries_page};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::date::default_history_range;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct History {
    pub groups: Vec<DayGroup>,
    pub pagination: Pagination,
}

/// Group already-sorted (newest first) entries by their local calendar day,
/// one group per day, groups in the same descending order.
fn group_by_date(entries: Vec<TimeEntry>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for entry in entries {
        let date = entry.local_date();
        match groups.last_mut() {
            Some(g) if g.date == date => g.entries.push(entry),
            _ => groups.push(DayGroup {
                date,
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// One page of a user's punch history, newest first, grouped per day.
/// The range defaults to the last 7 days through today.
pub fn list_history(
    conn: &Connection,
    user_id: Uuid,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    page: u32,
    page_size: u32,
) -> AppResult<History> {
    if page < 1 {
        return Err(AppError::Other("page must be >= 1".to_string()));
    }
    if page_size < 1 {
        return Err(AppError::Other("page size must be >= 1".to_string()));
    }

    let today = crate::utils::date::today();
    let (default_start, default_end) = default_history_range(today);
    let start = start.unwrap_or(default_start);
    let end = end.unwrap_or(default_end);

    let offset = (page as u64 - 1) * page_size as u64;
    let entries = load_entries_page(conn, user_id, start, end, page_size, offset)?;
    let total = count_entries_in_range(conn, user_id, start, end)?;

    let total_pages = total.div_ceil(page_size as u64);

    Ok(History {
        groups: group_by_date(entries),
        pagination: Pagination {
            page,
            page_size,
            total,
            total_pages,
        },
    })
}
