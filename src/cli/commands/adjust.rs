use crate::cli::commands::{effective_today, no_active_user_notice, require_identity};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::core::calendar::HolidayCalendar;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_time;

/// Correct or backfill one of today's punches.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust { kind, pos, at } = cmd {
        //
        // 1. Resolve punch kind (may legitimately be missing → prompt)
        //
        let kind_parsed = match kind {
            Some(code) => Some(PunchKind::from_code(code).ok_or_else(|| {
                AppError::InvalidKind(format!(
                    "Invalid punch kind '{}'. Use: in, lunch-out, lunch-in, out.",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 2. Resolve location and time
        //
        let location = match pos {
            Some(code) => Location::from_code(code).ok_or_else(|| {
                AppError::InvalidPosition(format!(
                    "Invalid location code '{}'. Use 'O' (on-site) or 'F' (field).",
                    code
                ))
            })?,
            None => Location::from_code(&cfg.default_position).unwrap_or(Location::OnSite),
        };

        let time = parse_time(at).ok_or_else(|| AppError::InvalidTime(at.to_string()))?;

        //
        // 3. Open DB and load the active identity
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let user = match require_identity(&pool.conn) {
            Ok(u) => u,
            Err(AppError::NoActiveUser) => {
                no_active_user_notice();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        //
        // 4. Execute logic
        //
        let today = effective_today(cli)?;
        let calendar = HolidayCalendar::from_config(cfg);
        let standard = cfg.standard_workday_minutes();

        match AdjustLogic::apply(
            &mut pool,
            &user,
            today,
            kind_parsed,
            location,
            time,
            &calendar,
            standard,
        ) {
            Ok(_) => {
                success("Punch adjusted.");
            }
            Err(AppError::MissingSelection) => {
                warning("Select the punch to adjust with --kind (in, lunch-out, lunch-in, out).");
            }
            Err(AppError::InvalidAdjustment(label)) => {
                warning(format!(
                    "{} is not recorded yet and is not the next expected punch.",
                    label
                ));
            }
            Err(AppError::DayComplete(d)) => {
                warning(format!("All four punches are already recorded for {}.", d));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
