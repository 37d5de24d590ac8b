//! Seed parser with validation
//!
//! Everything that can be checked without a database is checked here, so
//! the importer only fails on storage faults.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_syntax, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use hotel_core::model::{NewCustomer, NewRoom};
use hotel_core::rules::validation::{parse_date, validate_new_customer, validate_new_room};
use hotel_core::HotelError;
use std::collections::HashSet;
use std::path::Path;

const SUPPORTED_SCHEMA_VERSION: u32 = 0;

/// Parse and validate a seed file
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse and validate seed YAML
///
/// # Errors
/// - `Serialization` for malformed YAML or unknown fields
/// - `InvalidInput` for a wrong schema version, duplicate keys, dangling
///   booking references or records that fail the domain rules
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content).map_err(seed_syntax)?;
    validate_seed(&seed)?;
    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(seed_validation(format!(
            "Unsupported schema_version {} (expected {})",
            seed.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }

    let mut customer_keys = HashSet::new();
    for customer in &seed.customers {
        if !customer_keys.insert(customer.key.as_str()) {
            return Err(seed_validation(format!(
                "Duplicate customer key '{}'",
                customer.key
            )));
        }
        validate_new_customer(&NewCustomer::new(&customer.name, &customer.phone))
            .map_err(|e| record_error("customer", &customer.key, e))?;
    }

    let mut room_keys = HashSet::new();
    for room in &seed.rooms {
        if !room_keys.insert(room.key.as_str()) {
            return Err(seed_validation(format!("Duplicate room key '{}'", room.key)));
        }
        validate_new_room(&NewRoom::new(&room.room_number, &room.room_type, room.price))
            .map_err(|e| record_error("room", &room.key, e))?;
    }

    for (index, booking) in seed.bookings.iter().enumerate() {
        if !customer_keys.contains(booking.customer.as_str()) {
            return Err(seed_validation(format!(
                "Booking #{} references unknown customer '{}'",
                index + 1,
                booking.customer
            )));
        }
        if !room_keys.contains(booking.room.as_str()) {
            return Err(seed_validation(format!(
                "Booking #{} references unknown room '{}'",
                index + 1,
                booking.room
            )));
        }
        let label = format!("#{}", index + 1);
        parse_date("check_in_date", &booking.check_in)
            .and_then(|_| parse_date("check_out_date", &booking.check_out))
            .map_err(|e| record_error("booking", &label, e))?;
    }

    Ok(())
}

fn record_error(entity: &str, key: &str, err: HotelError) -> hotel_core::ExError {
    seed_validation(format!("Seed {} '{}': {}", entity, key, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_default() {
        let seed = parse_seed_str("schema_version: 0\n").unwrap();
        assert!(seed.customers.is_empty());
        assert!(seed.rooms.is_empty());
        assert!(seed.bookings.is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_seed_str("schema_version: 0\nguests: []\n").unwrap_err();
        assert_eq!(err.kind(), hotel_core::ExErrorKind::Serialization);
    }
}
