use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::PunchExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::params;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the punch ledger.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let punches = load_punches(pool, date_bounds)?;

        if punches.is_empty() {
            warning("⚠️  No punches found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&punches, path)?,
            ExportFormat::Json => export_json(&punches, path)?,
        }

        let _ = crate::db::log::audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} punches as {}", punches.len(), format.as_str()),
        );

        Ok(())
    }
}

/// Load export rows according to the bounds.
fn load_punches(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<PunchExport>> {
    let conn = &mut pool.conn;

    let mut punches = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, email, date, time, kind, location, source
                 FROM punches
                 ORDER BY date ASC, id ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;

            for r in rows {
                punches.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, email, date, time, kind, location, source
                 FROM punches
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;

            for r in rows {
                punches.push(r?);
            }
        }
    }

    Ok(punches)
}

/// Mapping DB → PunchExport (shared by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<PunchExport> {
    Ok(PunchExport {
        id: row.get(0)?,
        email: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        kind: row.get(4)?,
        location: row.get(5)?,
        source: row.get(6)?,
    })
}
