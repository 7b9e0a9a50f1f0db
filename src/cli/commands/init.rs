use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config file (unless in test mode) and the database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    let pool = DbPool::new(&db_str)?;
    init_db(&pool.conn)?;

    success(format!("Database ready: {}", db_str));
    Ok(())
}
