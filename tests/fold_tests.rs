//! The bank fold: fires only on a complete day, exactly once, atomically.
//! These tests drive the library API directly against an in-memory DB so
//! holidays and dates are fully under test control.

use chrono::{NaiveDate, NaiveTime};
use punchbank::core::calendar::HolidayCalendar;
use punchbank::core::logic::Core;
use punchbank::db::queries::{
    insert_punch, is_day_closed, load_bank, load_punches_by_date, update_punch,
};
use punchbank::models::location::Location;
use punchbank::models::punch::Punch;
use punchbank::models::punch_kind::PunchKind;

mod common;
use common::open_memory_db;

const EMAIL: &str = "a@x.com";
const STANDARD: i64 = 480;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn add_punch(conn: &rusqlite::Connection, d: &str, t: &str, kind: PunchKind) {
    let p = Punch::new(date(d), time(t), kind, Location::OnSite);
    insert_punch(conn, EMAIL, &p).expect("insert punch");
}

#[test]
fn test_complete_standard_day_folds_zero_delta() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::default();
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "08:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "12:00", PunchKind::LunchOut);
    add_punch(&conn, "2025-09-10", "13:00", PunchKind::LunchIn);
    add_punch(&conn, "2025-09-10", "17:00", PunchKind::ClockOut);

    let summary = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();

    assert_eq!(summary.worked_minutes, 480);
    assert_eq!(summary.bank_delta_minutes, 0);
    assert!(summary.closed);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 0);
    assert!(is_day_closed(&conn, EMAIL, &d).unwrap());
}

#[test]
fn test_incomplete_day_does_not_fold() {
    let conn = open_memory_db();
    // The test date is a holiday: summary must still be computed, but with
    // only two punches the bank is untouched.
    let cal = HolidayCalendar::from_dates([date("2025-09-10")]);
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "09:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "11:00", PunchKind::LunchOut);

    let summary = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();

    assert!(summary.holiday);
    assert_eq!(summary.worked_minutes, 120);
    assert_eq!(summary.bank_delta_minutes, 120);
    assert!(!summary.closed);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 0);
    assert!(!is_day_closed(&conn, EMAIL, &d).unwrap());
}

#[test]
fn test_holiday_surplus_folds_full_worked_time() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::from_dates([date("2025-09-10")]);
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "09:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "10:00", PunchKind::LunchOut);
    add_punch(&conn, "2025-09-10", "10:30", PunchKind::LunchIn);
    add_punch(&conn, "2025-09-10", "11:30", PunchKind::ClockOut);

    let summary = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();

    // 60 + 60 worked minutes, all surplus: no baseline on a holiday.
    assert_eq!(summary.bank_delta_minutes, 120);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 120);
}

#[test]
fn test_recompute_after_fold_is_idempotent() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::default();
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "08:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "12:00", PunchKind::LunchOut);
    add_punch(&conn, "2025-09-10", "13:00", PunchKind::LunchIn);
    add_punch(&conn, "2025-09-10", "18:00", PunchKind::ClockOut);

    let first = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();
    assert_eq!(first.bank_delta_minutes, 60);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);

    // Recomputing again without any new punch must not fold twice.
    let second = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();
    assert!(second.closed);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);

    let third = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();
    assert!(third.closed);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);
}

#[test]
fn test_adjustment_after_close_does_not_refold() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::default();
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "08:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "12:00", PunchKind::LunchOut);
    add_punch(&conn, "2025-09-10", "13:00", PunchKind::LunchIn);
    add_punch(&conn, "2025-09-10", "18:00", PunchKind::ClockOut);

    Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);

    // Correct the clock-out to 17:00 after the day was closed: the stored
    // punch changes, the displayed summary changes, the bank does not.
    let day = load_punches_by_date(&conn, EMAIL, &d).unwrap();
    let out = day
        .iter()
        .find(|p| p.kind == PunchKind::ClockOut)
        .expect("clock-out present");
    update_punch(&conn, out.id, time("17:00"), Location::OnSite).unwrap();

    let summary = Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();
    assert_eq!(summary.worked_minutes, 480);
    assert_eq!(summary.bank_delta_minutes, 0);
    assert!(summary.closed);
    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);
}

#[test]
fn test_deltas_accumulate_across_days() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::default();

    for (d, out_time, _) in [
        ("2025-09-10", "18:00", 60),
        ("2025-09-11", "16:30", -30),
    ] {
        add_punch(&conn, d, "08:00", PunchKind::ClockIn);
        add_punch(&conn, d, "12:00", PunchKind::LunchOut);
        add_punch(&conn, d, "13:00", PunchKind::LunchIn);
        add_punch(&conn, d, out_time, PunchKind::ClockOut);
        Core::recompute_and_fold(&conn, EMAIL, date(d), &cal, STANDARD).unwrap();
    }

    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 30);
}

#[test]
fn test_banks_are_independent_per_user() {
    let conn = open_memory_db();
    let cal = HolidayCalendar::default();
    let d = date("2025-09-10");

    add_punch(&conn, "2025-09-10", "08:00", PunchKind::ClockIn);
    add_punch(&conn, "2025-09-10", "12:00", PunchKind::LunchOut);
    add_punch(&conn, "2025-09-10", "13:00", PunchKind::LunchIn);
    add_punch(&conn, "2025-09-10", "18:00", PunchKind::ClockOut);

    Core::recompute_and_fold(&conn, EMAIL, d, &cal, STANDARD).unwrap();

    assert_eq!(load_bank(&conn, EMAIL).unwrap(), 60);
    // An unseen email reads as an empty ledger and a zero bank.
    assert_eq!(load_bank(&conn, "b@x.com").unwrap(), 0);
    assert!(
        load_punches_by_date(&conn, "b@x.com", &d)
            .unwrap()
            .is_empty()
    );
}
