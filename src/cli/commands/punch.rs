use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::punch::record_punch;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::ui::messages::success;
use chrono::Local;

/// Record a punch for the active user, stamped with the current clock.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind } = &cli.command {
        let kind = EntryType::from_code(kind).ok_or_else(|| {
            AppError::InvalidEntryType(format!(
                "'{}' — use in, lunch-out, lunch-in or out",
                kind
            ))
        })?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_ref(), cfg)?;

        let entry = record_punch(&mut pool.conn, user.id, kind, Local::now())?;

        success(format!(
            "Punched {} at {} for {}.",
            entry.kind,
            entry.time_str(),
            user.name
        ));
    }

    Ok(())
}
