use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(
                "start and end must have the same format".to_string(),
            ));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys: i32 = start
                    .parse()
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid start year: {start}")))?;
                let ye: i32 = end
                    .parse()
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid end year: {end}")))?;

                let d1 = NaiveDate::from_ymd_opt(ys, 1, 1)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("invalid start year: {ys}")))?;
                let d2 = NaiveDate::from_ymd_opt(ye, 12, 31)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("invalid end year: {ye}")))?;
                Ok((d1, d2))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let d1 = parse_month_start(start)?;
                let d2 = parse_month_end(end)?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => {
                let d1 = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid start date: {start}")))?;
                let d2 = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid end date: {end}")))?;
                Ok((d1, d2))
            }
            _ => Err(AppError::InvalidPeriod(format!(
                "unsupported range format: {r}"
            ))),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r
                    .parse()
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid year: {r}")))?;
                let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("invalid year: {y}")))?;
                let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                    .ok_or_else(|| AppError::InvalidPeriod(format!("invalid year: {y}")))?;
                Ok((d1, d2))
            }
            // YYYY-MM
            7 => {
                let d1 = parse_month_start(r)?;
                let d2 = parse_month_end(r)?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD
            10 => {
                let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidPeriod(format!("invalid date: {r}")))?;
                Ok((d, d))
            }
            _ => Err(AppError::InvalidPeriod(format!(
                "unsupported --range format: {r}"
            ))),
        }
    }
}

fn parse_month_start(s: &str) -> AppResult<NaiveDate> {
    let y: i32 = s[0..4]
        .parse()
        .map_err(|_| AppError::InvalidPeriod(format!("invalid year: {s}")))?;
    let m: u32 = s[5..7]
        .parse()
        .map_err(|_| AppError::InvalidPeriod(format!("invalid month: {s}")))?;

    NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| AppError::InvalidPeriod(format!("invalid month: {s}")))
}

fn parse_month_end(s: &str) -> AppResult<NaiveDate> {
    let y: i32 = s[0..4]
        .parse()
        .map_err(|_| AppError::InvalidPeriod(format!("invalid year: {s}")))?;
    let m: u32 = s[5..7]
        .parse()
        .map_err(|_| AppError::InvalidPeriod(format!("invalid month: {s}")))?;

    let last = month_last_day(y, m)
        .ok_or_else(|| AppError::InvalidPeriod(format!("invalid month: {s}")))?;

    NaiveDate::from_ymd_opt(y, m, last)
        .ok_or_else(|| AppError::InvalidPeriod(format!("invalid month: {s}")))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
