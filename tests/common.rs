#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A fixed "today" used by CLI tests: Wednesday 2025-09-10, not a holiday.
pub const TODAY: &str = "2025-09-10";

pub fn pb() -> Command {
    cargo_bin_cmd!("punchbank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchbank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema (no config file is written in test mode).
pub fn init_db(db_path: &str) {
    pb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and register the default test user.
pub fn init_and_register(db_path: &str) {
    init_db(db_path);

    pb().args([
        "--db",
        db_path,
        "--test",
        "register",
        "--name",
        "Alice",
        "--email",
        "a@x.com",
    ])
    .assert()
    .success();
}

/// Record one punch at an explicit time on the fixed test date.
pub fn punch_at(db_path: &str, time: &str) {
    pb().args([
        "--db", db_path, "--test", "--today", TODAY, "punch", "--at", time,
    ])
    .assert()
    .success();
}

/// Record a standard complete day: 08:00 / 12:00 / 13:00 / 17:00.
pub fn punch_full_day(db_path: &str) {
    for t in ["08:00", "12:00", "13:00", "17:00"] {
        punch_at(db_path, t);
    }
}

/// Open a fresh in-memory database with the full schema, for tests that
/// drive the library API directly.
pub fn open_memory_db() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
    punchbank::db::initialize::init_db(&conn).expect("init db");
    conn
}
