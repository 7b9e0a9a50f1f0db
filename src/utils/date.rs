use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Default history window: the last 7 days through today.
pub fn default_history_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(7), today)
}
