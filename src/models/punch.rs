use super::{location::Location, punch_kind::PunchKind};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One recorded clock event.
///
/// The calendar date is stored once as a `NaiveDate`; the ISO key and the
/// localized display form are both derived from it on demand, so the two
/// renderings can never drift apart.
#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i64,            // ⇔ punches.id (INTEGER PRIMARY KEY)
    pub date: NaiveDate,    // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // ⇔ punches.time (TEXT "HH:MM")
    pub kind: PunchKind,    // ⇔ punches.kind ('clock_in' | 'lunch_out' | 'lunch_in' | 'clock_out')
    pub location: Location, // ⇔ punches.location ('O' | 'F')

    pub source: String,     // ⇔ punches.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ punches.created_at (TEXT, ISO8601)
}

impl Punch {
    /// High-level constructor for punches created by the CLI.
    /// - Sets `id = 0` (assigned by SQLite on insert)
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(date: NaiveDate, time: NaiveTime, kind: PunchKind, location: Location) -> Self {
        Self {
            id: 0,
            date,
            time,
            kind,
            location,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// ISO form, machine-sortable: "YYYY-MM-DD".
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Localized display form: "DD/MM/YYYY".
    pub fn date_display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Combined point-in-time, used to subtract two same-day punches.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
