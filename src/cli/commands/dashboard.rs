use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::dashboard::compute_dashboard;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::colored_status;
use chrono::{DateTime, Local};

fn fmt_slot(slot: Option<DateTime<Local>>) -> String {
    slot.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_minutes(min: i64) -> String {
    format!("{}h {:02}m", min / 60, min % 60)
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { json } = &cli.command {
        let pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool.conn, cli.user.as_ref(), cfg)?;

        let snapshot = compute_dashboard(&pool.conn, user.id, Local::now())?;

        if *json {
            let out = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        println!("📅 {} — {}", snapshot.date, user.name);
        println!(
            "   In {}   Lunch {} → {}   Out {}",
            fmt_slot(snapshot.entries.check_in),
            fmt_slot(snapshot.entries.lunch_out),
            fmt_slot(snapshot.entries.lunch_in),
            fmt_slot(snapshot.entries.check_out),
        );
        println!(
            "   Worked {}   Remaining {}   Expected {}",
            fmt_minutes(snapshot.working_hours.worked),
            fmt_minutes(snapshot.working_hours.remaining),
            fmt_minutes(snapshot.working_hours.expected_total),
        );
        println!("   Status: {}", colored_status(snapshot.status));
    }

    Ok(())
}
