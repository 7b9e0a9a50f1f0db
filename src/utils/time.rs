use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

static HHMM_RE: OnceLock<Regex> = OnceLock::new();

/// Strict HH:MM wall-clock check before parsing: 00-23 hours, 00-59 minutes.
fn is_hhmm(s: &str) -> bool {
    HHMM_RE
        .get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap())
        .is_match(s)
}

pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    if !is_hhmm(s) {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_time(s: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match s {
        Some(v) => Ok(Some(parse_time(v)?)),
        None => Ok(None),
    }
}

/// Minutes since midnight, the unit all schedule-window checks reason in.
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    use chrono::Timelike;
    t.hour() as i64 * 60 + t.minute() as i64
}
