use crate::core::calendar::HolidayCalendar;
use crate::core::ledger;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, load_punches_by_date, update_punch};
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::location::Location;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::user::UserIdentity;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `adjust` command: correct or backfill
/// one of today's punches.
///
/// This is the correction path, distinct from `PunchLogic`: it targets a
/// named slot. An existing punch is overwritten in place; a missing one may
/// only be backfilled when it is the slot `append` would fill next.
pub struct AdjustLogic;

impl AdjustLogic {
    pub fn apply(
        pool: &mut DbPool,
        user: &UserIdentity,
        today: NaiveDate,
        kind: Option<PunchKind>,
        location: Location,
        time: NaiveTime,
        calendar: &HolidayCalendar,
        standard_minutes: i64,
    ) -> AppResult<DaySummary> {
        // An adjustment must name the slot it corrects.
        let kind = kind.ok_or(AppError::MissingSelection)?;

        let tx = pool.conn.transaction()?;

        let day_punches = load_punches_by_date(&tx, &user.email, &today)?;

        match ledger::find_by_kind(&day_punches, kind) {
            Some(existing) => {
                // Overwrite in place: id and ledger position are preserved.
                update_punch(&tx, existing.id, time, location)?;
            }
            None => {
                // Backfill is only valid for the slot `append` would fill
                // next; anything else would punch holes in the sequence.
                match ledger::next_expected_kind(&day_punches) {
                    Some(expected) if expected == kind => {
                        let punch = Punch::new(today, time, kind, location);
                        insert_punch(&tx, &user.email, &punch)?;
                    }
                    Some(_) => {
                        return Err(AppError::InvalidAdjustment(kind.label().to_string()));
                    }
                    None => {
                        return Err(AppError::DayComplete(today.format("%Y-%m-%d").to_string()));
                    }
                }
            }
        }

        let summary =
            Core::recompute_and_fold(&tx, &user.email, today, calendar, standard_minutes)?;

        audit(
            &tx,
            "adjust",
            &today.format("%Y-%m-%d").to_string(),
            &format!(
                "{} set to {} ({}) for {}",
                kind.label(),
                time.format("%H:%M"),
                location.label(),
                user.email
            ),
        )?;

        tx.commit()?;
        Ok(summary)
    }
}
