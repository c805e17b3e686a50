use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Created first because migration
/// bookkeeping is stored there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration version has already been recorded.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Record a migration version in the log table.
fn record_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Base schema: identity, punches, time_bank, closed_days.
fn migrate_base_schema(conn: &Connection) -> Result<()> {
    let version = "20250612_0001_base_schema";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS identity (
            id    INTEGER PRIMARY KEY CHECK (id = 1),
            name  TEXT NOT NULL,
            email TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS punches (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            email      TEXT NOT NULL,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('clock_in','lunch_out','lunch_in','clock_out')),
            location   TEXT NOT NULL DEFAULT 'O' CHECK(location IN ('O','F')),
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_punches_email_date_kind
            ON punches(email, date, kind);
        CREATE INDEX IF NOT EXISTS idx_punches_email_date
            ON punches(email, date);

        CREATE TABLE IF NOT EXISTS time_bank (
            email   TEXT PRIMARY KEY,
            minutes INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;

    record_migration(conn, version, "Created identity, punches and time_bank tables")?;
    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Day-closure bookkeeping: a closed day's delta has been folded into the
/// bank and must never be folded again.
fn migrate_closed_days(conn: &Connection) -> Result<()> {
    let version = "20250612_0002_closed_days";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS closed_days (
            email     TEXT NOT NULL,
            date      TEXT NOT NULL,
            delta     INTEGER NOT NULL,
            closed_at TEXT NOT NULL,
            PRIMARY KEY (email, date)
        );
        "#,
    )?;

    record_migration(conn, version, "Created closed_days table for the bank fold")?;
    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_base_schema(conn)?;
    migrate_closed_days(conn)?;
    Ok(())
}
