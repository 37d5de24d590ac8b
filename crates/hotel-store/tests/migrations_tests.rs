// Integration tests for the migration framework

use hotel_core::ExErrorKind;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = hotel_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    // And: The three record stores plus the version table exist
    let tables = get_table_names(&conn);
    assert_eq!(
        tables,
        vec!["bookings", "customers", "rooms", "schema_version"]
    );
}

#[test]
fn test_every_migration_is_recorded_once() {
    let mut conn = setup_test_db();
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(
        count as usize,
        hotel_store::migrations::get_migrations().len()
    );
}

#[test]
fn test_room_availability_defaults_to_one() {
    let mut conn = setup_test_db();
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute(
        "INSERT INTO rooms (room_number, room_type, price) VALUES ('101', 'Single', 100.0)",
        [],
    )
    .unwrap();

    let availability: i64 = conn
        .query_row("SELECT availability FROM rooms WHERE id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(availability, 1);
}

#[test]
fn test_tampered_migration_checksum_fails() {
    // Given: A migrated database whose recorded checksum no longer matches
    let mut conn = setup_test_db();
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    // When: Migrations run again
    let err = hotel_store::migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The mismatch is reported
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("001_initial_schema"));
}

#[test]
fn test_unknown_recorded_migration_fails() {
    // Given: A database migrated by a newer build
    let mut conn = setup_test_db();
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES ('999_future', 0, NULL)",
        [],
    )
    .unwrap();

    // When / Then
    let err = hotel_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("999_future"));
}

#[test]
fn test_existing_tables_are_adopted() {
    // Given: A database created with the same layout before migrations existed
    let mut conn = setup_test_db();
    conn.execute_batch(
        "CREATE TABLE customers (id INTEGER PRIMARY KEY, name TEXT NOT NULL, phone TEXT NOT NULL);
         INSERT INTO customers (name, phone) VALUES ('John Doe', '1234567890');",
    )
    .unwrap();

    // When: Migrations are applied
    hotel_store::migrations::apply_migrations(&mut conn).unwrap();

    // Then: Existing rows survive
    let customers = hotel_store::SqliteRepo::list_customers(&conn).unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "John Doe");
}
