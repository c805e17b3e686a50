use crate::core::calendar::HolidayCalendar;
use crate::core::ledger;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_bank, load_punches};
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::user::UserIdentity;
use crate::utils::colors::{color_for_day_label, color_for_minutes, GREY, RESET};
use crate::utils::formatting::bold;
use crate::utils::time::format_signed;
use chrono::NaiveDate;

/// High-level business logic for the `status` command: hydrate the ledger
/// and the bank, recompute today's summary, and render the dashboard.
pub struct StatusLogic;

impl StatusLogic {
    pub fn show(
        pool: &mut DbPool,
        user: &UserIdentity,
        today: NaiveDate,
        calendar: &HolidayCalendar,
        standard_minutes: i64,
    ) -> AppResult<()> {
        // Recomputation may fold a completed day that was never folded.
        // The closure guard makes this a no-op on an already-closed day.
        let summary = {
            let tx = pool.conn.transaction()?;
            let summary =
                Core::recompute_and_fold(&tx, &user.email, today, calendar, standard_minutes)?;
            tx.commit()?;
            summary
        };

        let punches = load_punches(&pool.conn, &user.email)?;
        let bank = load_bank(&pool.conn, &user.email)?;

        println!("\n{}", bold(&format!("Hello {}!", user.name)));

        match ledger::last_punch(&punches) {
            Some(p) => println!(
                "Last record: {} at {} on {} ({})",
                p.kind.label(),
                p.time_str(),
                p.date_display(),
                p.location.label()
            ),
            None => println!("Last record: {GREY}none yet{RESET}"),
        }

        print_today(&summary);

        println!(
            "Time bank:   {}{}{}",
            color_for_minutes(bank),
            format_signed(bank),
            RESET
        );
        println!();

        Ok(())
    }
}

fn print_today(summary: &DaySummary) {
    let day_color = color_for_day_label(summary.holiday, summary.bridge);

    println!(
        "Today:       {} | {}{}{} | {}/4 punches{}",
        summary.date.format("%d/%m/%Y"),
        day_color,
        summary.day_label(),
        RESET,
        summary.punch_count,
        if summary.closed { " (closed)" } else { "" },
    );
    println!(
        "Worked:      {} | Day delta: {}{}{}",
        crate::utils::formatting::mins2readable(summary.worked_minutes, true),
        color_for_minutes(summary.bank_delta_minutes),
        format_signed(summary.bank_delta_minutes),
        RESET
    );
}
