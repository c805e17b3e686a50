use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_identity, load_identity};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Clear the active identity only. The ledger and the bank survive for the
/// next login under the same email.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match load_identity(&pool.conn)? {
        Some(user) => {
            clear_identity(&pool.conn)?;
            audit(
                &pool.conn,
                "logout",
                &user.email,
                &format!("Logged out {} <{}>", user.name, user.email),
            )?;
            success(format!("Logged out {}.", user.name));
        }
        None => {
            info("No active user to log out.");
        }
    }

    Ok(())
}
