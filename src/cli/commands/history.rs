use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::history::list_history;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        from,
        to,
        page,
        page_size,
        json,
    } = &cli.command
    {
        let start = from
            .as_ref()
            .map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
            .transpose()?;
        let end = to
            .as_ref()
            .map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
            .transpose()?;

        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_ref(), cfg)?;

        let history = list_history(&pool.conn, user.id, start, end, *page, *page_size)?;

        if *json {
            let out = serde_json::to_string_pretty(&history)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        for group in &history.groups {
            println!("📅 {}", group.date);
            for entry in &group.entries {
                println!("   {}  {}", entry.time_str(), entry.kind);
            }
        }
        println!(
            "Page {}/{} ({} punches)",
            history.pagination.page, history.pagination.total_pages, history.pagination.total
        );
    }

    Ok(())
}
