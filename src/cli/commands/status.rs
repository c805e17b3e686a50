use crate::cli::commands::{effective_today, no_active_user_notice, require_identity};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// The load action: hydrate identity, ledger and bank, recompute today's
/// summary and render it. Aborts early when no identity is registered.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let user = match require_identity(&pool.conn) {
        Ok(u) => u,
        Err(AppError::NoActiveUser) => {
            no_active_user_notice();
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let today = effective_today(cli)?;
    let calendar = HolidayCalendar::from_config(cfg);
    let standard = cfg.standard_workday_minutes();

    StatusLogic::show(&mut pool, &user, today, &calendar, standard)
}
