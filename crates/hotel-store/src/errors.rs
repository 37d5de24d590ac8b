//! Error handling for hotel-store
//!
//! Wraps hotel-core ExError with store-specific constructors

use hotel_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create an error for a database migrated by a newer build
pub fn unknown_migration(migration_id: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration")
        .with_message(format!(
            "Database has migration {} which this build does not know",
            migration_id
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason)
}

/// Create a seed deserialization error
pub fn seed_syntax(err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("seed_parse")
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error for a stored booking date that is not `YYYY-MM-DD`
///
/// Rows written before dates were validated can hold free text; the error
/// names the booking so it can be updated or deleted.
pub fn stored_date_error(booking_id: i64, field: &str, value: &str, source: ExError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("read_booking")
        .with_entity("booking", booking_id)
        .with_field(field)
        .with_message(format!(
            "Stored {} '{}' is not a YYYY-MM-DD date; update or delete the booking",
            field, value
        ))
        .with_source(source)
}
