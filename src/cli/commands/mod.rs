pub mod config;
pub mod dashboard;
pub mod history;
pub mod init;
pub mod punch;
pub mod schedule;
pub mod user;

use crate::config::Config;
use crate::db::queries::find_user_by_name;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use rusqlite::Connection;

/// Resolve the acting user: --user wins, then the configured default.
pub fn resolve_user(
    conn: &Connection,
    cli_user: Option<&String>,
    cfg: &Config,
) -> AppResult<User> {
    let name = cli_user
        .cloned()
        .or_else(|| cfg.default_user.clone())
        .ok_or_else(|| {
            AppError::Config(
                "no user specified: pass --user NAME or set default_user in the config".to_string(),
            )
        })?;

    find_user_by_name(conn, &name)?.ok_or(AppError::UnknownUser(name))
}
