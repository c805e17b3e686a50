use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::save_identity;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserIdentity;
use crate::ui::messages::success;

/// Create or overwrite the active user identity. The punch ledger and the
/// time bank are keyed by email and are not touched here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { name, email } = cmd {
        if name.trim().is_empty() {
            return Err(AppError::Config("Name must not be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::Config(format!(
                "'{}' does not look like an email address",
                email
            )));
        }

        let user = UserIdentity::new(name, email);

        let mut pool = DbPool::new(&cfg.database)?;
        save_identity(&pool.conn, &user)?;

        audit(
            &pool.conn,
            "register",
            &user.email,
            &format!("Registered {} <{}>", user.name, user.email),
        )?;

        success(format!("Registered {} <{}>.", user.name, user.email));
    }

    Ok(())
}
