pub mod adjust;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod logout;
pub mod punch;
pub mod register;
pub mod status;

use crate::cli::parser::Cli;
use crate::db::queries::load_identity;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserIdentity;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Resolve the date treated as "today": the hidden `--today` override when
/// present, the wall clock otherwise.
pub(crate) fn effective_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// Ledger and bank operations need a registered identity; absence is
/// signalled as `NoActiveUser` and handled at the command boundary as an
/// informational no-op, never as a crash.
pub(crate) fn require_identity(conn: &Connection) -> AppResult<UserIdentity> {
    load_identity(conn)?.ok_or(AppError::NoActiveUser)
}

/// Shared notice printed when a command aborts for lack of an identity.
pub(crate) fn no_active_user_notice() {
    crate::ui::messages::info("No active user. Run `punchbank register` first.");
}
