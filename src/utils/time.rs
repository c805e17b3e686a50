//! Time utilities: parsing HH:MM, duration computations, formatting signed
//! minute amounts, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Combined point-in-time for subtracting two same-day times.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Elapsed minutes from `earlier` to `later`, clamped to zero when the
/// inputs are misordered so a malformed punch pair can never produce
/// negative worked time.
pub fn minutes_between(later: NaiveTime, earlier: NaiveTime) -> i64 {
    (later - earlier).num_minutes().max(0)
}

/// Render a signed minute amount as `+HH:MM` / `-HH:MM`.
/// Zero renders `+00:00`.
pub fn format_signed(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "+" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a work duration like "8h", "7h30", "7h30m" or plain minutes ("480")
/// into minutes.
pub fn parse_work_duration(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();

    if let Ok(mins) = s.parse::<i64>() {
        return Some(mins);
    }

    let (hours_part, rest) = s.split_once('h')?;
    let hours: i64 = hours_part.trim().parse().ok()?;

    let rest = rest.trim().trim_end_matches('m');
    let minutes: i64 = if rest.is_empty() { 0 } else { rest.parse().ok()? };

    Some(hours * 60 + minutes)
}
