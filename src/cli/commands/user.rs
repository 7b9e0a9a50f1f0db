use crate::cli::parser::UserCommands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_user_by_name, insert_user, list_users};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &UserCommands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        UserCommands::Add { name } => {
            if find_user_by_name(&pool.conn, name)?.is_some() {
                return Err(AppError::DuplicateUser(name.clone()));
            }
            let user = User::new(name);
            insert_user(&pool.conn, &user)?;
            success(format!("Added user '{}' ({}).", user.name, user.id));
        }
        UserCommands::List => {
            let users = list_users(&pool.conn)?;
            if users.is_empty() {
                info("No users registered yet.");
            }
            for u in users {
                println!("{}  {}", u.id, u.name);
            }
        }
    }

    Ok(())
}
