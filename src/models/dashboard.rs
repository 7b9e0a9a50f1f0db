use super::entry_type::EntryType;
use super::time_entry::TimeEntry;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// At most one timestamp per punch kind for a single day.
/// Replaces ad hoc searches over the entry list: one pass, first hit
/// per kind wins (duplicates cannot occur on a well-sequenced day,
/// keeping the first is only a defensive default).
#[derive(Debug, Default, Clone, Serialize)]
pub struct DaySlots {
    pub check_in: Option<DateTime<Local>>,
    pub lunch_out: Option<DateTime<Local>>,
    pub lunch_in: Option<DateTime<Local>>,
    pub check_out: Option<DateTime<Local>>,
}

impl DaySlots {
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        let mut slots = Self::default();
        for e in entries {
            let slot = match e.kind {
                EntryType::In => &mut slots.check_in,
                EntryType::LunchOut => &mut slots.lunch_out,
                EntryType::LunchIn => &mut slots.lunch_in,
                EntryType::Out => &mut slots.check_out,
            };
            if slot.is_none() {
                *slot = Some(e.timestamp);
            }
        }
        slots
    }
}

/// Minutes worked / remaining against the expected workday length.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkingHours {
    pub worked: i64,
    pub remaining: i64,
    pub expected_total: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    NotStarted,
    Working,
    Lunch,
    Finished,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "not_started",
            WorkStatus::Working => "working",
            WorkStatus::Lunch => "lunch",
            WorkStatus::Finished => "finished",
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Today's derived view: never persisted, recomputed from the day's
/// entries and (optionally) the day's schedule on every call.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub date: NaiveDate,
    pub entries: DaySlots,
    pub working_hours: WorkingHours,
    pub status: WorkStatus,
}
