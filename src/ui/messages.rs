//! Colored terminal output helpers.

use crate::models::dashboard::WorkStatus;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_BLUE: &str = "\x1b[34m";
const FG_CYAN: &str = "\x1b[36m";
const FG_RED: &str = "\x1b[31m";
const FG_GRAY: &str = "\x1b[90m";

fn paint(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(FG_RED, "❌", msg));
}

/// Status label colored to match its meaning on the dashboard.
pub fn colored_status(status: WorkStatus) -> String {
    let color = match status {
        WorkStatus::NotStarted => FG_GRAY,
        WorkStatus::Working => FG_GREEN,
        WorkStatus::Lunch => FG_CYAN,
        WorkStatus::Finished => FG_BLUE,
    };
    format!("{}{}{}{}", color, BOLD, status, RESET)
}
