use super::entry_type::EntryType;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

/// One punch event. Append-only: created once by the punch engine,
/// never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: EntryType,         // ⇔ time_entries.kind
    pub timestamp: DateTime<Local>, // ⇔ time_entries.timestamp (RFC3339), server clock
    pub created_at: String,      // ⇔ time_entries.created_at (RFC3339)
}

impl TimeEntry {
    /// Build a fresh entry stamped with the given server instant.
    /// The caller never supplies the timestamp from user input.
    pub fn new(user_id: Uuid, kind: EntryType, timestamp: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            timestamp,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Local calendar day this punch belongs to.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
