//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch type: {0}")]
    InvalidEntryType(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    // ---------------------------
    // Punch sequencing
    // ---------------------------
    #[error("Invalid punch sequence: {0}")]
    SequenceViolation(String),

    #[error("Workday already finished: an OUT punch was recorded for {0}")]
    DayAlreadyFinished(String),

    // ---------------------------
    // Schedule errors
    // ---------------------------
    #[error("Invalid schedule window: {0}")]
    InvalidWindow(String),

    #[error("A schedule already exists for this user on {0}")]
    DuplicateSchedule(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    // ---------------------------
    // Lookup failures
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
