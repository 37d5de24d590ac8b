//! CLI integration tests
//!
//! These run the `hotel` binary against a database in a temp directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn hotel(db_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hotel"))
        .arg("--db")
        .arg(db_path)
        .args(args)
        .env_remove("HOTEL_DB")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_demo_seed_then_list_json() {
    // Scenario: the sample data is loaded and listed as JSON
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hotel.db");

    stdout_of(&hotel(&db_path, &["seed", "demo"]));

    let customers: serde_json::Value =
        serde_json::from_str(&stdout_of(&hotel(&db_path, &["customer", "list", "--json"])))
            .unwrap();
    assert_eq!(customers[0]["name"], "John Doe");
    assert_eq!(customers[0]["phone"], "1234567890");

    let rooms: serde_json::Value =
        serde_json::from_str(&stdout_of(&hotel(&db_path, &["room", "list", "--json"]))).unwrap();
    assert_eq!(rooms[0]["room_number"], "101");
    assert_eq!(rooms[0]["availability"], false);

    let booking: serde_json::Value =
        serde_json::from_str(&stdout_of(&hotel(&db_path, &["booking", "show", "1", "--json"])))
            .unwrap();
    assert_eq!(booking["check_in_date"], "2024-06-20");
    assert_eq!(booking["check_out_date"], "2024-06-25");
}

#[test]
fn test_cli_booking_lifecycle_updates_availability() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("hotel.db");

    stdout_of(&hotel(
        &db_path,
        &["customer", "add", "--name", "John Doe", "--phone", "1234567890"],
    ));
    stdout_of(&hotel(
        &db_path,
        &["room", "add", "--number", "101", "--type", "Single", "--price", "100"],
    ));
    let added = stdout_of(&hotel(
        &db_path,
        &[
            "booking",
            "add",
            "--customer-id",
            "1",
            "--room-id",
            "1",
            "--check-in",
            "2024-06-20",
            "--check-out",
            "2024-06-25",
        ],
    ));
    assert!(added.contains("#1 customer 1 room 1 2024-06-20 -> 2024-06-25"));

    let rooms = stdout_of(&hotel(&db_path, &["room", "list"]));
    assert!(rooms.contains("#1 room 101 [Single] 100.00 - occupied"));

    stdout_of(&hotel(&db_path, &["booking", "delete", "1"]));
    let room = stdout_of(&hotel(&db_path, &["room", "show", "1"]));
    assert!(room.contains("- available"));
}

#[test]
fn test_cli_failure_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hotel.db");

    let output = hotel(&db_path, &["room", "show", "99"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {}", stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr was: {}", stderr);
}

#[test]
fn test_cli_rejects_malformed_date() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hotel.db");
    stdout_of(&hotel(&db_path, &["seed", "demo"]));

    let output = hotel(
        &db_path,
        &[
            "booking",
            "add",
            "--customer-id",
            "1",
            "--room-id",
            "1",
            "--check-in",
            "June 20",
            "--check-out",
            "2024-06-25",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let bookings = stdout_of(&hotel(&db_path, &["booking", "list"]));
    assert_eq!(bookings.lines().count(), 1);
}

#[test]
fn test_cli_menu_is_default_and_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hotel.db");

    let mut child = Command::new(env!("CARGO_BIN_EXE_hotel"))
        .arg("--db")
        .arg(&db_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1\nJohn Doe\n1234567890\n4\n0\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("12. Delete Booking"));
    assert!(stdout.contains("  #1 John Doe (1234567890)"));

    // The menu wrote through to the same database
    let listed = stdout_of(&hotel(&db_path, &["customer", "list"]));
    assert!(listed.contains("#1 John Doe (1234567890)"));
}

#[test]
fn test_cli_seed_import_directory() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hotel.db");
    let seeds = temp_dir.path().join("seeds");
    std::fs::create_dir_all(&seeds).unwrap();
    std::fs::write(
        seeds.join("01_rooms.yaml"),
        "schema_version: 0\nrooms:\n  - { key: r1, room_number: \"101\", room_type: Single, price: 100.0 }\n",
    )
    .unwrap();
    std::fs::write(
        seeds.join("02_guests.yml"),
        "schema_version: 0\ncustomers:\n  - { key: jane, name: Jane Roe, phone: \"555\" }\n",
    )
    .unwrap();
    std::fs::write(seeds.join("README.txt"), "not a seed").unwrap();

    let stdout = stdout_of(&hotel(&db_path, &["seed", "import", seeds.to_str().unwrap()]));

    assert_eq!(stdout.matches("Importing").count(), 2);
    assert!(stdout_of(&hotel(&db_path, &["room", "list"])).contains("room 101"));
    assert!(stdout_of(&hotel(&db_path, &["customer", "list"])).contains("Jane Roe"));
}

#[test]
fn test_cli_db_path_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("from_env.db");

    let output = Command::new(env!("CARGO_BIN_EXE_hotel"))
        .current_dir(temp_dir.path())
        .env("HOTEL_DB", &db_path)
        .args(["seed", "demo"])
        .output()
        .expect("Failed to execute CLI");

    stdout_of(&output);
    assert!(db_path.exists());
}
