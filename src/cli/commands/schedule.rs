use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands, ScheduleCommands};
use crate::config::Config;
use crate::core::schedule::{
    bulk_create_schedules, create_schedule, default_window, edit_schedule, list_user_schedules,
    remove_schedule, BulkScheduleItem,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{Schedule, SchedulePatch};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::time::{parse_optional_time, parse_time};
use chrono::NaiveTime;
use uuid::Uuid;

fn parse_id(s: &str) -> AppResult<Uuid> {
    Uuid::parse_str(s).map_err(|_| AppError::InvalidId(s.to_string()))
}

fn fmt_window(s: &Schedule) -> String {
    let lunch = match (s.lunch_start, s.lunch_end) {
        (Some(ls), Some(le)) => format!(
            ", lunch {}-{}",
            ls.format("%H:%M"),
            le.format("%H:%M")
        ),
        _ => String::new(),
    };
    format!(
        "{} {}-{}{}",
        s.date_str(),
        s.start_time.format("%H:%M"),
        s.end_time.format("%H:%M"),
        lunch
    )
}

fn fmt_opt_time(t: Option<NaiveTime>) -> String {
    t.map(|v| v.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Schedule { cmd } = &cli.command else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        ScheduleCommands::Add {
            date,
            start,
            end,
            lunch_start,
            lunch_end,
        } => {
            let user = resolve_user(&pool.conn, cli.user.as_ref(), cfg)?;
            let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

            // fall back to the stock preset field by field
            let (def_start, def_end, def_ls, def_le) = default_window();
            let start = match start {
                Some(s) => parse_time(s)?,
                None => def_start,
            };
            let end = match end {
                Some(s) => parse_time(s)?,
                None => def_end,
            };
            let lunch_start = match lunch_start {
                Some(s) => Some(parse_time(s)?),
                None => def_ls,
            };
            let lunch_end = match lunch_end {
                Some(s) => Some(parse_time(s)?),
                None => def_le,
            };

            let schedule =
                create_schedule(&pool.conn, user.id, date, start, end, lunch_start, lunch_end)?;
            success(format!(
                "Schedule {} created: {}",
                schedule.id,
                fmt_window(&schedule)
            ));
        }

        ScheduleCommands::Edit {
            id,
            start,
            end,
            lunch_start,
            lunch_end,
        } => {
            let id = parse_id(id)?;
            let patch = SchedulePatch {
                start_time: parse_optional_time(start.as_ref())?,
                end_time: parse_optional_time(end.as_ref())?,
                lunch_start: parse_optional_time(lunch_start.as_ref())?,
                lunch_end: parse_optional_time(lunch_end.as_ref())?,
            };

            let schedule = edit_schedule(&pool.conn, id, &patch)?;
            success(format!("Schedule updated: {}", fmt_window(&schedule)));
        }

        ScheduleCommands::Del { id } => {
            let id = parse_id(id)?;
            remove_schedule(&pool.conn, id)?;
            success(format!("Schedule {} deleted.", id));
        }

        ScheduleCommands::List { from, to, all } => {
            let range = match (from, to) {
                (Some(f), Some(t)) => Some((
                    parse_date(f).ok_or_else(|| AppError::InvalidDate(f.clone()))?,
                    parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?,
                )),
                _ => None,
            };

            let user_id = if *all {
                None
            } else {
                Some(resolve_user(&pool.conn, cli.user.as_ref(), cfg)?.id)
            };

            let schedules = list_user_schedules(&pool.conn, user_id, range)?;
            if schedules.is_empty() {
                info("No schedules found.");
            }
            for s in schedules {
                println!(
                    "{}  {}  {}-{}  lunch {}-{}",
                    s.id,
                    s.date_str(),
                    s.start_time.format("%H:%M"),
                    s.end_time.format("%H:%M"),
                    fmt_opt_time(s.lunch_start),
                    fmt_opt_time(s.lunch_end),
                );
            }
        }

        ScheduleCommands::Bulk { file } => {
            let content = std::fs::read_to_string(file)?;
            let items: Vec<BulkScheduleItem> = serde_json::from_str(&content)
                .map_err(|e| AppError::Other(format!("invalid bulk file {}: {}", file, e)))?;

            let created = bulk_create_schedules(&pool.conn, &items)?;
            success(format!(
                "Created {} schedule(s), skipped {} existing.",
                created.len(),
                items.len() - created.len()
            ));
        }
    }

    Ok(())
}
