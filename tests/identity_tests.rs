use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TODAY, init_and_register, init_db, pb, punch_at, setup_test_db};

#[test]
fn test_register_and_status_greeting() {
    let db_path = setup_test_db("register_greeting");
    init_and_register(&db_path);

    pb().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Hello Alice!"));
}

#[test]
fn test_reregistration_overwrites_identity() {
    let db_path = setup_test_db("register_overwrite");
    init_and_register(&db_path);

    pb().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "--name",
        "Bob",
        "--email",
        "b@x.com",
    ])
    .assert()
    .success();

    pb().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Hello Bob!"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_register_rejects_malformed_email() {
    let db_path = setup_test_db("register_bad_email");
    init_db(&db_path);

    pb().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "--name",
        "Alice",
        "--email",
        "not-an-email",
    ])
    .assert()
    .failure()
    .stderr(contains("does not look like an email address"));
}

#[test]
fn test_logout_clears_identity_only() {
    let db_path = setup_test_db("logout_keeps_ledger");
    init_and_register(&db_path);

    // Close a surplus day, then log out.
    punch_at(&db_path, "08:00");
    punch_at(&db_path, "12:00");
    punch_at(&db_path, "13:00");
    punch_at(&db_path, "18:00");

    pb().args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out Alice"));

    pb().args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("No active user"));

    // Ledger and bank survive: logging back in under the same email
    // restores the folded balance.
    pb().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "--name",
        "Alice",
        "--email",
        "a@x.com",
    ])
    .assert()
    .success();

    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("+01:00"));
}

#[test]
fn test_logout_without_identity_is_informational() {
    let db_path = setup_test_db("logout_no_user");
    init_db(&db_path);

    pb().args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("No active user to log out."));
}

#[test]
fn test_ledgers_are_keyed_by_email() {
    let db_path = setup_test_db("ledger_per_email");
    init_and_register(&db_path);

    punch_at(&db_path, "08:00");

    // Switch to a different user: their day starts empty.
    pb().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "--name",
        "Bob",
        "--email",
        "b@x.com",
    ])
    .assert()
    .success();

    pb().args(["--db", &db_path, "--test", "--today", TODAY, "status"])
        .assert()
        .success()
        .stdout(contains("0/4 punches"));
}
