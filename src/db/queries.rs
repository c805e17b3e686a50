use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::user::UserIdentity;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The current session identity, if one is registered.
/// Absence is a regular state, never an error.
pub fn load_identity(conn: &Connection) -> AppResult<Option<UserIdentity>> {
    let mut stmt = conn.prepare("SELECT name, email FROM identity WHERE id = 1")?;

    let identity = stmt
        .query_row([], |row| {
            Ok(UserIdentity {
                name: row.get(0)?,
                email: row.get(1)?,
            })
        })
        .optional()?;

    Ok(identity)
}

/// Create or overwrite the session identity. The punch ledger and the time
/// bank are keyed by email and deliberately left untouched.
pub fn save_identity(conn: &Connection, user: &UserIdentity) -> AppResult<()> {
    conn.execute(
        "INSERT INTO identity (id, name, email) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email",
        params![user.name, user.email],
    )?;
    Ok(())
}

/// Clear the session identity only; ledger and bank survive for the next
/// login under the same email.
pub fn clear_identity(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM identity WHERE id = 1", [])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Punches
// ---------------------------------------------------------------------------

pub fn map_row(row: &Row) -> Result<Punch> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    let loc_str: String = row.get("location")?;
    let location = Location::from_db_str(&loc_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPosition(loc_str.clone())),
        )
    })?;

    Ok(Punch {
        id: row.get("id")?,
        date,
        time,
        kind,
        location,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Full ledger for one user, in insertion order.
pub fn load_punches(conn: &Connection, email: &str) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE email = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([email], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One day's punches for one user, in insertion order.
pub fn load_punches_by_date(
    conn: &Connection,
    email: &str,
    date: &NaiveDate,
) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE email = ?1 AND date = ?2
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![email, date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a punch and return its assigned id.
pub fn insert_punch(conn: &Connection, email: &str, punch: &Punch) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (email, date, time, kind, location, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            email,
            punch.date_key(),
            punch.time_str(),
            punch.kind.to_db_str(),
            punch.location.to_db_str(),
            punch.source,
            punch.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the mutable fields of an existing punch. Id, date and kind are
/// preserved: an adjustment corrects a slot, it never moves it.
pub fn update_punch(
    conn: &Connection,
    id: i64,
    time: NaiveTime,
    location: Location,
) -> AppResult<()> {
    conn.execute(
        "UPDATE punches SET time = ?1, location = ?2 WHERE id = ?3",
        params![
            time.format("%H:%M").to_string(),
            location.to_db_str(),
            id
        ],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Time bank
// ---------------------------------------------------------------------------

/// Bank balance in minutes; an absent row reads as zero.
pub fn load_bank(conn: &Connection, email: &str) -> AppResult<i64> {
    let mut stmt = conn.prepare("SELECT minutes FROM time_bank WHERE email = ?1")?;

    let minutes: Option<i64> = stmt.query_row([email], |row| row.get(0)).optional()?;

    Ok(minutes.unwrap_or(0))
}

pub fn save_bank(conn: &Connection, email: &str, minutes: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO time_bank (email, minutes) VALUES (?1, ?2)
         ON CONFLICT(email) DO UPDATE SET minutes = excluded.minutes",
        params![email, minutes],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Day closure
// ---------------------------------------------------------------------------

pub fn is_day_closed(conn: &Connection, email: &str, date: &NaiveDate) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM closed_days WHERE email = ?1 AND date = ?2")?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let found = stmt
        .query_row(params![email, date_str], |_| Ok(()))
        .optional()?;

    Ok(found.is_some())
}

/// Record that `date`'s delta has been folded into the bank. The primary key
/// on (email, date) rejects a second closure even under a race.
pub fn mark_day_closed(
    conn: &Connection,
    email: &str,
    date: &NaiveDate,
    delta: i64,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO closed_days (email, date, delta, closed_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            email,
            date.format("%Y-%m-%d").to_string(),
            delta,
            chrono::Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Closure deltas for a set of days, used by `list` to flag folded days.
pub fn closed_delta(conn: &Connection, email: &str, date: &NaiveDate) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare("SELECT delta FROM closed_days WHERE email = ?1 AND date = ?2")?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let delta = stmt
        .query_row(params![email, date_str], |row| row.get(0))
        .optional()?;

    Ok(delta)
}
