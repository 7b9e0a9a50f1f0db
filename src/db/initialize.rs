use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the full schema if it is not present yet.
///
/// `time_entries` is an append-only punch log: a derived `date` column
/// ("YYYY-MM-DD", local day of `timestamp`) carries the per-day indexes the
/// engine queries by. `schedules` enforces the one-per-(user, day) rule at
/// the storage level too, as a backstop behind the engine's existence check.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id),
            date        TEXT NOT NULL,
            timestamp   TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('in','lunch_out','lunch_in','out')),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON time_entries(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_entries_user_ts   ON time_entries(user_id, timestamp);

        CREATE TABLE IF NOT EXISTS schedules (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id),
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            lunch_start TEXT,
            lunch_end   TEXT,
            created_at  TEXT NOT NULL,
            UNIQUE(user_id, date)
        );
        "#,
    )?;
    Ok(())
}
