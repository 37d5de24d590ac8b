//! Seed importer orchestration
//!
//! Inserts a validated seed in one transaction: either every record lands
//! or none does.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::repo::SqliteRepo;
use crate::seed::format_v0::SeedV0;
use crate::seed::parser::{parse_seed_file, parse_seed_str};
use hotel_core::model::{NewBooking, NewCustomer, NewRoom};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in sample data (John Doe, room 101, one booking)
pub const DEMO_SEED: &str = include_str!("../../seeds/demo.yaml");

/// Number of records inserted per entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub customers: usize,
    pub rooms: usize,
    pub bookings: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} customer(s), {} room(s), {} booking(s)",
            self.customers, self.rooms, self.bookings
        )
    }
}

/// Import a seed file into the database
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<ImportSummary> {
    let seed = parse_seed_file(path)?;
    import_seed_v0(&seed, conn)
}

/// Import seed YAML held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<ImportSummary> {
    let seed = parse_seed_str(content)?;
    import_seed_v0(&seed, conn)
}

/// Import the built-in demo seed
pub fn import_demo(conn: &mut Connection) -> Result<ImportSummary> {
    import_seed_str(DEMO_SEED, conn)
}

/// Insert a parsed seed
///
/// Each booking also marks its room unavailable, as a booking created
/// through the engine would.
pub fn import_seed_v0(seed: &SeedV0, conn: &mut Connection) -> Result<ImportSummary> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut summary = ImportSummary::default();

    let mut customer_ids = HashMap::new();
    for customer in &seed.customers {
        let stored =
            SqliteRepo::insert_customer(&tx, &NewCustomer::new(&customer.name, &customer.phone))?;
        customer_ids.insert(customer.key.as_str(), stored.id);
        summary.customers += 1;
    }

    let mut room_ids = HashMap::new();
    for room in &seed.rooms {
        let stored = SqliteRepo::insert_room(
            &tx,
            &NewRoom::new(&room.room_number, &room.room_type, room.price),
        )?;
        room_ids.insert(room.key.as_str(), stored.id);
        summary.rooms += 1;
    }

    for booking in &seed.bookings {
        let customer_id = *customer_ids
            .get(booking.customer.as_str())
            .ok_or_else(|| dangling("customer", &booking.customer))?;
        let room_id = *room_ids
            .get(booking.room.as_str())
            .ok_or_else(|| dangling("room", &booking.room))?;
        let draft = NewBooking::parse(customer_id, room_id, &booking.check_in, &booking.check_out)?;

        SqliteRepo::insert_booking(&tx, &draft)?;
        SqliteRepo::set_room_availability(&tx, room_id, false)?;
        summary.bookings += 1;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        customers = summary.customers,
        rooms = summary.rooms,
        bookings = summary.bookings,
        "imported seed"
    );
    Ok(summary)
}

fn dangling(entity: &str, key: &str) -> hotel_core::ExError {
    seed_validation(format!("Booking references unknown {} '{}'", entity, key))
}
