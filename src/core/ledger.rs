//! Pure sequencing rules for the punch ledger.
//!
//! A day holds at most four punches, one per kind, conceptually filling the
//! canonical slots Clock-in → Lunch-out → Lunch-in → Clock-out. `append`
//! walks this sequence; adjustments may fill slots out of order.

use crate::models::punch::Punch;
use crate::models::punch_kind::{PUNCH_SEQUENCE, PunchKind};
use chrono::NaiveDate;

/// All punches recorded for `date`, in ledger (insertion) order.
pub fn punches_for_day(punches: &[Punch], date: NaiveDate) -> Vec<Punch> {
    punches.iter().filter(|p| p.date == date).cloned().collect()
}

/// The canonical kind the next `append` will record for this day, or `None`
/// once all four punches exist.
pub fn next_expected_kind(day_punches: &[Punch]) -> Option<PunchKind> {
    PUNCH_SEQUENCE.get(day_punches.len()).copied()
}

/// Find the day's punch of a given kind, if recorded.
pub fn find_by_kind<'a>(day_punches: &'a [Punch], kind: PunchKind) -> Option<&'a Punch> {
    day_punches.iter().find(|p| p.kind == kind)
}

/// Most recent punch in ledger order, used for the "last record" display.
pub fn last_punch(punches: &[Punch]) -> Option<&Punch> {
    punches.last()
}
