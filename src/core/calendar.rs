//! Holiday calendar and bridge-day policy.

use crate::config::Config;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// A fixed set of holiday dates, loaded from configuration.
///
/// Classification is pure: membership for holidays, and a deliberately
/// narrow adjacency rule for bridge days.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build the calendar from the config's `holidays` list. Entries that do
    /// not parse as ISO dates are skipped (`config --check` reports them).
    pub fn from_config(cfg: &Config) -> Self {
        Self::from_dates(
            cfg.holidays
                .iter()
                .filter_map(|s| crate::utils::date::parse_date(s)),
        )
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// A bridge day is a Friday whose previous day is a holiday, or a Monday
    /// whose next day is a holiday. No other weekday qualifies, even when it
    /// sits next to a holiday across a weekend.
    pub fn is_bridge_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Fri => date.pred_opt().is_some_and(|prev| self.is_holiday(prev)),
            Weekday::Mon => date.succ_opt().is_some_and(|next| self.is_holiday(next)),
            _ => false,
        }
    }
}
