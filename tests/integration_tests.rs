use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TODAY, init_and_register, init_db, pb, punch_at, punch_full_day, setup_test_db};

#[test]
fn test_punch_sequencing_walks_canonical_order() {
    let db_path = setup_test_db("punch_sequencing");
    init_and_register(&db_path);

    punch_at(&db_path, "08:00");
    punch_at(&db_path, "12:00");
    punch_at(&db_path, "13:00");
    punch_at(&db_path, "17:00");

    // The ledger lists the four kinds in canonical order.
    pb().args(["--db", &db_path, "--test", "list", "--period", TODAY])
        .assert()
        .success()
        .stdout(contains("Clock-in"))
        .stdout(contains("Lunch-out"))
        .stdout(contains("Lunch-in"))
        .stdout(contains("Clock-out"))
        .stdout(contains("[closed]"));
}

#[test]
fn test_fifth_punch_is_rejected_without_state_change() {
    let db_path = setup_test_db("fifth_punch");
    init_and_register(&db_path);

    punch_full_day(&db_path);

    // A fifth punch is a non-fatal notice, not an error.
    pb().args([
        "--db", &db_path, "--test", "--today", TODAY, "punch", "--at", "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("All four punches are already recorded"));

    // Nothing was appended.
    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("4/4 punches"));
}

#[test]
fn test_standard_day_folds_zero_into_bank() {
    let db_path = setup_test_db("standard_day_bank");
    init_and_register(&db_path);

    punch_full_day(&db_path);

    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("Hello Alice!"))
        .stdout(contains("(closed)"))
        .stdout(contains("Time bank:"))
        .stdout(contains("+00:00"));
}

#[test]
fn test_surplus_day_raises_the_bank() {
    let db_path = setup_test_db("surplus_day_bank");
    init_and_register(&db_path);

    punch_at(&db_path, "08:00");
    punch_at(&db_path, "12:00");
    punch_at(&db_path, "13:00");
    punch_at(&db_path, "18:00");

    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("+01:00"));
}

#[test]
fn test_status_is_idempotent_after_day_close() {
    let db_path = setup_test_db("status_idempotent");
    init_and_register(&db_path);

    punch_at(&db_path, "08:00");
    punch_at(&db_path, "12:00");
    punch_at(&db_path, "13:00");
    punch_at(&db_path, "18:00");

    // Recomputing the summary repeatedly must fold the +01:00 delta once.
    for _ in 0..3 {
        pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
            .assert()
            .success()
            .stdout(contains("+01:00"))
            .stdout(contains("+02:00").not());
    }
}

#[test]
fn test_incomplete_day_does_not_touch_the_bank() {
    let db_path = setup_test_db("incomplete_day");
    init_and_register(&db_path);

    punch_at(&db_path, "09:00");
    punch_at(&db_path, "11:00");

    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("2/4 punches"))
        .stdout(contains("(closed)").not())
        .stdout(contains("Time bank:"))
        .stdout(contains("+00:00"));
}

#[test]
fn test_punch_without_active_user_is_a_noop() {
    let db_path = setup_test_db("punch_no_user");
    init_db(&db_path);

    pb().args([
        "--db", &db_path, "--test", "--today", TODAY, "punch", "--at", "08:00",
    ])
    .assert()
    .success()
    .stdout(contains("No active user"));
}

#[test]
fn test_status_without_active_user_aborts_early() {
    let db_path = setup_test_db("status_no_user");
    init_db(&db_path);

    pb().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("No active user"))
        .stdout(contains("Time bank:").not());
}

#[test]
fn test_punch_with_field_location() {
    let db_path = setup_test_db("punch_field_location");
    init_and_register(&db_path);

    pb().args([
        "--db", &db_path, "--test", "--today", TODAY, "punch", "--pos", "F", "--at", "08:00",
    ])
    .assert()
    .success();

    pb().args(["--db", &db_path, "--test", "list", "--period", TODAY])
        .assert()
        .success()
        .stdout(contains("Field"));
}

#[test]
fn test_punch_rejects_invalid_location_code() {
    let db_path = setup_test_db("punch_bad_location");
    init_and_register(&db_path);

    pb().args([
        "--db", &db_path, "--test", "--today", TODAY, "punch", "--pos", "X", "--at", "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid position code"));
}

#[test]
fn test_list_empty_period_reports_no_punches() {
    let db_path = setup_test_db("list_empty");
    init_and_register(&db_path);

    pb().args(["--db", &db_path, "--test", "list", "--period", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("No punches for 2024-01-15"));
}

#[test]
fn test_list_rejects_invalid_period() {
    let db_path = setup_test_db("list_bad_period");
    init_and_register(&db_path);

    pb().args(["--db", &db_path, "--test", "list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_maintenance");
    init_and_register(&db_path);
    punch_full_day(&db_path);

    pb().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: OK"));

    pb().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total punches:"))
        .stdout(contains("4"));
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");
    init_db(&db_path);
    init_db(&db_path);

    pb().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: OK"));
}
