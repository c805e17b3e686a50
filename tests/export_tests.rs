use predicates::str::contains;
use std::fs;

mod common;
use common::{init_and_register, pb, punch_full_day, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_punch_rows() {
    let db_path = setup_test_db("export_csv");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    let out = temp_out("export_csv", "csv");

    pb().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("clock_in"));
    assert!(content.contains("clock_out"));
    assert!(content.contains("2025-09-10"));
    assert!(content.contains("a@x.com"));
}

#[test]
fn test_export_json_contains_punch_rows() {
    let db_path = setup_test_db("export_json");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    let out = temp_out("export_json", "json");

    pb().args([
        "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"kind\": \"lunch_out\""));
    assert!(content.contains("\"email\": \"a@x.com\""));
}

#[test]
fn test_export_range_filters_dates() {
    let db_path = setup_test_db("export_range");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    let out = temp_out("export_range", "csv");

    // A range that excludes the test date exports nothing.
    pb().args([
        "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--range",
        "2024", "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No punches found for selected range"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    pb().args([
        "--db",
        &db_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    pb().args(["--db", &db_path, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip_out = std::path::Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_out).ok();

    pb().args([
        "--db", &db_path, "--test", "backup", "--file", &out, "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Compressed:"));

    assert!(zip_out.exists());
    assert!(!std::path::Path::new(&out).exists());
}
