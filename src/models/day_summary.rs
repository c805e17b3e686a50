use chrono::NaiveDate;

/// Derived accounting summary for one calendar day.
/// Recomputed on demand from the day's punches; never persisted.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub bank_delta_minutes: i64,
    pub holiday: bool,
    pub bridge: bool,
    pub punch_count: usize,
    /// True once the day's delta has been folded into the time bank.
    pub closed: bool,
}

impl DaySummary {
    pub fn day_label(&self) -> &'static str {
        if self.holiday {
            "Holiday"
        } else if self.bridge {
            "Bridge day"
        } else {
            "Working day"
        }
    }

    pub fn is_complete(&self) -> bool {
        self.punch_count == 4
    }
}
