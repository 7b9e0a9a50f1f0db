use crate::db::queries::{insert_entry, load_entries_for_day};
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Local};
use rusqlite::{Connection, TransactionBehavior};
use uuid::Uuid;

/// Record one punch for a user, enforcing the daily sequence:
///
/// - empty day          → only IN
/// - IN / LUNCH_IN      → LUNCH_OUT or OUT
/// - LUNCH_OUT          → LUNCH_IN
/// - OUT                → nothing until the next day
///
/// The accepted entry is stamped with `now` (the server clock); client
/// supplied timestamps are never consulted. The read-decide-write runs in
/// one IMMEDIATE transaction, so two competing punches for the same user
/// and day serialize instead of both seeing the same last entry.
pub fn record_punch(
    conn: &mut Connection,
    user_id: Uuid,
    kind: EntryType,
    now: DateTime<Local>,
) -> AppResult<TimeEntry> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let today = now.date_naive();

    let todays_entries = load_entries_for_day(&tx, user_id, today)?;

    match todays_entries.last() {
        None => {
            if kind != EntryType::In {
                return Err(AppError::SequenceViolation(
                    "first punch of the day must be IN".to_string(),
                ));
            }
        }
        Some(last) => {
            if last.kind.is_out() {
                return Err(AppError::DayAlreadyFinished(
                    today.format("%Y-%m-%d").to_string(),
                ));
            }
            if !last.kind.allowed_next().contains(&kind) {
                return Err(AppError::SequenceViolation(format!(
                    "{} -> {} is not a legal transition",
                    last.kind, kind
                )));
            }
        }
    }

    let entry = TimeEntry::new(user_id, kind, now);
    insert_entry(&tx, &entry)?;
    tx.commit()?;

    Ok(entry)
}
