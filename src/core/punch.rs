use crate::core::calendar::HolidayCalendar;
use crate::core::ledger;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, load_punches_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::location::Location;
use crate::models::punch::Punch;
use crate::models::user::UserIdentity;
use chrono::{NaiveDate, NaiveTime, Timelike};

/// High-level business logic for the `punch` command: append the next
/// punch in the canonical sequence for today.
pub struct PunchLogic;

impl PunchLogic {
    /// Append the next-in-sequence punch for `today` and recompute the
    /// day's summary. The insert, the recomputation and a possible bank
    /// fold run as one transaction.
    pub fn apply(
        pool: &mut DbPool,
        user: &UserIdentity,
        today: NaiveDate,
        location: Location,
        explicit_time: Option<NaiveTime>,
        calendar: &HolidayCalendar,
        standard_minutes: i64,
    ) -> AppResult<DaySummary> {
        let tx = pool.conn.transaction()?;

        let day_punches = load_punches_by_date(&tx, &user.email, &today)?;

        let kind = ledger::next_expected_kind(&day_punches)
            .ok_or_else(|| AppError::DayComplete(today.format("%Y-%m-%d").to_string()))?;

        let time = match explicit_time {
            Some(t) => t,
            None => now_hh_mm(),
        };

        let punch = Punch::new(today, time, kind, location);
        insert_punch(&tx, &user.email, &punch)?;

        let summary =
            Core::recompute_and_fold(&tx, &user.email, today, calendar, standard_minutes)?;

        audit(
            &tx,
            "punch",
            &punch.date_key(),
            &format!(
                "{} at {} ({}) for {}",
                kind.label(),
                punch.time_str(),
                location.label(),
                user.email
            ),
        )?;

        tx.commit()?;
        Ok(summary)
    }
}

/// Current wall-clock time truncated to whole minutes; punches carry no
/// seconds.
fn now_hh_mm() -> NaiveTime {
    let now = chrono::Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap()
}
