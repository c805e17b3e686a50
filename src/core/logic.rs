use crate::core::calendar::HolidayCalendar;
use crate::core::ledger;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::utils::time::minutes_between;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct Core;

impl Core {
    /// Worked minutes for one day: the morning interval (Clock-in →
    /// Lunch-out) plus the afternoon interval (Lunch-in → Clock-out).
    /// A pair missing either endpoint contributes zero; each interval is
    /// clamped non-negative. Punch times carry no seconds, so the sum is
    /// already a whole number of minutes.
    pub fn worked_minutes(day_punches: &[Punch]) -> i64 {
        let clock_in = ledger::find_by_kind(day_punches, PunchKind::ClockIn);
        let lunch_out = ledger::find_by_kind(day_punches, PunchKind::LunchOut);
        let lunch_in = ledger::find_by_kind(day_punches, PunchKind::LunchIn);
        let clock_out = ledger::find_by_kind(day_punches, PunchKind::ClockOut);

        let mut total = 0;

        if let (Some(ci), Some(lo)) = (clock_in, lunch_out) {
            total += minutes_between(lo.time, ci.time);
        }
        if let (Some(li), Some(co)) = (lunch_in, clock_out) {
            total += minutes_between(co.time, li.time);
        }

        total
    }

    /// The day's contribution to the time bank.
    ///
    /// On a holiday or bridge day there is no expected baseline, so every
    /// worked minute is pure surplus. On an ordinary day the standard
    /// workday is subtracted.
    pub fn daily_delta(worked: i64, holiday: bool, bridge: bool, standard_minutes: i64) -> i64 {
        if holiday || bridge {
            worked
        } else {
            worked - standard_minutes
        }
    }

    /// Pure summary for one day, with no persistence involved.
    pub fn build_day_summary(
        day_punches: &[Punch],
        date: NaiveDate,
        calendar: &HolidayCalendar,
        standard_minutes: i64,
    ) -> DaySummary {
        let holiday = calendar.is_holiday(date);
        let bridge = calendar.is_bridge_day(date);
        let worked = Self::worked_minutes(day_punches);

        DaySummary {
            date,
            worked_minutes: worked,
            bank_delta_minutes: Self::daily_delta(worked, holiday, bridge, standard_minutes),
            holiday,
            bridge,
            punch_count: day_punches.len(),
            closed: false,
        }
    }

    /// Recompute the summary for `date` and, when the day has exactly four
    /// punches and has not been closed yet, fold its delta into the user's
    /// time bank and record the closure.
    ///
    /// This is the sole writer of the time bank. The closure row makes the
    /// fold idempotent: recomputing after the fourth punch (a `status`
    /// call, an adjustment, a retry) leaves the bank untouched.
    ///
    /// Must run inside the caller's transaction so the punch write, the
    /// bank update, and the closure marker land atomically.
    pub fn recompute_and_fold(
        conn: &Connection,
        email: &str,
        date: NaiveDate,
        calendar: &HolidayCalendar,
        standard_minutes: i64,
    ) -> AppResult<DaySummary> {
        let day_punches = queries::load_punches_by_date(conn, email, &date)?;
        let mut summary = Self::build_day_summary(&day_punches, date, calendar, standard_minutes);

        summary.closed = queries::is_day_closed(conn, email, &date)?;

        if summary.is_complete() && !summary.closed {
            let bank = queries::load_bank(conn, email)?;
            queries::save_bank(conn, email, bank + summary.bank_delta_minutes)?;
            queries::mark_day_closed(conn, email, &date, summary.bank_delta_minutes)?;
            summary.closed = true;
        }

        Ok(summary)
    }
}
