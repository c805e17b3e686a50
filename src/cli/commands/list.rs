use crate::cli::commands::{no_active_user_notice, require_identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{closed_delta, load_punches_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::utils::colors::{RESET, color_for_day_label, color_for_minutes};
use crate::utils::date;
use crate::utils::time::format_signed;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let user = match require_identity(&pool.conn) {
            Ok(u) => u,
            Err(AppError::NoActiveUser) => {
                no_active_user_notice();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let dates = resolve_period(period)?;
        let single_day = dates.len() == 1;

        let calendar = HolidayCalendar::from_config(cfg);
        let standard = cfg.standard_workday_minutes();

        let mut shown = 0;

        for d in dates {
            let punches = load_punches_by_date(&pool.conn, &user.email, &d)?;

            if punches.is_empty() {
                if single_day {
                    println!("No punches for {}", d);
                }
                continue;
            }

            let summary = Core::build_day_summary(&punches, d, &calendar, standard);
            let folded = closed_delta(&pool.conn, &user.email, &d)?;

            print_day(&d, &punches, &summary, folded);
            shown += 1;
        }

        if shown == 0 && !single_day {
            println!("No punches in the selected period.");
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidPeriod);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidPeriod);
    }

    date::current_month_dates().map_err(AppError::InvalidPeriod)
}

fn print_day(
    d: &NaiveDate,
    punches: &[Punch],
    summary: &crate::models::day_summary::DaySummary,
    folded: Option<i64>,
) {
    let day_color = color_for_day_label(summary.holiday, summary.bridge);

    println!(
        "\n📅 {} ({}) | {}{}{}{}",
        d.format("%Y-%m-%d"),
        date::weekday_short(*d),
        day_color,
        summary.day_label(),
        RESET,
        if folded.is_some() { " [closed]" } else { "" },
    );

    for p in punches {
        println!(
            "   {:<10} {}  {}",
            p.kind.label(),
            p.time_str(),
            p.location.label()
        );
    }

    println!(
        "   Worked {} | Delta {}{}{}",
        crate::utils::formatting::mins2readable(summary.worked_minutes, true),
        color_for_minutes(summary.bank_delta_minutes),
        format_signed(summary.bank_delta_minutes),
        RESET
    );

    // A closed day's folded delta is frozen; flag any divergence from the
    // recomputed value after later adjustments.
    if let Some(frozen) = folded
        && frozen != summary.bank_delta_minutes
    {
        println!(
            "   Folded as {} at closure (differs from recomputed delta)",
            format_signed(frozen)
        );
    }
}
