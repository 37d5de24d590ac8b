//! Opening a `hotel_management.db` written by the earlier desktop program
//!
//! That program created the same three tables but kept booking dates as
//! free text, so rows may hold values that are not `YYYY-MM-DD`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use hotel_core::model::NewBooking;
use hotel_core::ExErrorKind;
use hotel_engine::Repository;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LEGACY_SCHEMA: &str = "
    CREATE TABLE customers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        phone TEXT NOT NULL
    );
    CREATE TABLE rooms (
        id INTEGER PRIMARY KEY,
        room_number TEXT NOT NULL,
        room_type TEXT NOT NULL,
        price REAL NOT NULL,
        availability INTEGER NOT NULL DEFAULT 1
    );
    CREATE TABLE bookings (
        id INTEGER PRIMARY KEY,
        customer_id INTEGER,
        room_id INTEGER,
        check_in_date TEXT NOT NULL,
        check_out_date TEXT NOT NULL,
        FOREIGN KEY (customer_id) REFERENCES customers(id),
        FOREIGN KEY (room_id) REFERENCES rooms(id)
    );
";

/// Booking 1 is well formed, booking 2 holds free-text dates
fn legacy_database(dir: &Path) -> PathBuf {
    let path = dir.join("hotel_management.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(LEGACY_SCHEMA).unwrap();
    conn.execute_batch(
        "INSERT INTO customers VALUES (1, 'John Doe', '1234567890');
         INSERT INTO rooms VALUES (1, '101', 'Single', 100.0, 0);
         INSERT INTO bookings VALUES (1, 1, 1, '2024-06-20', '2024-06-25');
         INSERT INTO bookings VALUES (2, 1, 1, '20/06/2024', 'tomorrow');",
    )
    .unwrap();
    path
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_free_text_date_is_reported_against_its_booking() {
    // Given: a legacy database with one unreadable booking
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::open(legacy_database(temp_dir.path())).unwrap();

    // When: all bookings are listed
    let err = repo.get_bookings().unwrap_err();

    // Then: the error names the booking and the column instead of a bare database failure
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.entity(), Some("booking"));
    assert_eq!(err.entity_id(), Some(2));
    assert_eq!(err.field(), Some("check_in_date"));
    assert!(err.to_string().contains("20/06/2024"), "{err}");
    assert_eq!(
        err.source_error().map(|e| e.kind()),
        Some(ExErrorKind::InvalidInput)
    );

    // The readable booking is still reachable on its own
    let first = repo.get_booking(1).unwrap();
    assert_eq!(first.check_in_date, date(2024, 6, 20));
}

#[test]
fn test_booking_with_free_text_date_can_be_deleted() {
    let temp_dir = TempDir::new().unwrap();
    let mut repo = Repository::open(legacy_database(temp_dir.path())).unwrap();

    let freed = repo.delete_booking(2).unwrap();

    assert_eq!(freed, 1);
    assert!(repo.get_room(1).unwrap().availability);
    let remaining: Vec<_> = repo.get_bookings().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(remaining, vec![1]);
}

#[test]
fn test_booking_with_free_text_date_can_be_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let mut repo = Repository::open(legacy_database(temp_dir.path())).unwrap();

    let repaired = repo
        .update_booking(2, NewBooking::new(1, 1, date(2024, 6, 20), date(2024, 6, 21)))
        .unwrap();

    assert_eq!(repaired.id, 2);
    assert_eq!(repo.get_bookings().unwrap().len(), 2);
    assert_eq!(repo.get_booking(2).unwrap(), repaired);
}

#[test]
fn test_legacy_database_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = legacy_database(temp_dir.path());

    drop(Repository::open(&path).unwrap());
    let repo = Repository::open(&path).unwrap();

    assert_eq!(repo.get_customers().unwrap().len(), 1);
    assert!(!repo.get_room(1).unwrap().availability);
}
