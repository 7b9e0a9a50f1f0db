use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;
use uuid::Uuid;

/// A user's expected working window for one calendar date.
/// At most one schedule per (user_id, date).
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,               // ⇔ schedules.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,         // ⇔ schedules.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,           // ⇔ schedules.end_time
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub created_at: String,            // RFC3339
}

/// Partial update for `schedule edit`: absent fields keep their stored value.
#[derive(Debug, Default, Clone)]
pub struct SchedulePatch {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
}

impl Schedule {
    pub fn new(
        user_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        lunch_start: Option<NaiveTime>,
        lunch_end: Option<NaiveTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            start_time,
            end_time,
            lunch_start,
            lunch_end,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Expected workday length in minutes: the start→end window minus the
    /// lunch window when both lunch fields are set.
    pub fn expected_minutes(&self) -> i64 {
        let mut total = (self.end_time - self.start_time).num_minutes();
        if let (Some(ls), Some(le)) = (self.lunch_start, self.lunch_end) {
            total -= (le - ls).num_minutes();
        }
        total
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
