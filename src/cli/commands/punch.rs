use crate::cli::commands::{effective_today, no_active_user_notice, require_identity};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_signed, parse_optional_time};

/// Record the next punch of the day.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { pos, at } = cmd {
        //
        // 1. Resolve location (CLI flag, else config default)
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

        //
        // 2. Parse explicit time (optional)
        //
        let at_parsed = parse_optional_time(at.as_ref())?;

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

        match PunchLogic::apply(
            &mut pool, &user, today, location, at_parsed, &calendar, standard,
        ) {
            Ok(summary) => {
                let recorded = summary.punch_count;
                success(format!(
                    "Punch {}/4 recorded for {}.",
                    recorded,
                    today.format("%d/%m/%Y")
                ));
                if summary.closed && recorded == 4 {
                    info(format!(
                        "Day complete: worked {}, {} folded into the time bank.",
                        crate::utils::formatting::mins2readable(summary.worked_minutes, true),
                        format_signed(summary.bank_delta_minutes)
                    ));
                }
            }
            // Non-fatal: surfaced as a notice, no state change.
            Err(AppError::DayComplete(d)) => {
                warning(format!("All four punches are already recorded for {}.", d));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
