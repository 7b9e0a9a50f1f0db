pub mod dashboard;
pub mod history;
pub mod punch;
pub mod schedule;
