pub mod dashboard;
pub mod entry_type;
pub mod schedule;
pub mod time_entry;
pub mod user;
