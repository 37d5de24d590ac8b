use thiserror::Error;

use crate::model::{BookingId, CustomerId, RoomId};

/// Result type alias using HotelError
pub type Result<T> = std::result::Result<T, HotelError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the store, the engine or the CLI is classified
/// into one of these kinds. Each kind maps to a stable error code that tests
/// and callers can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed or missing required field (empty name, negative price, bad date)
    InvalidInput,
    /// Referenced record does not exist
    NotFound,
    /// Operation would break a declared relationship or a recorded checksum
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    /// Underlying store unavailable or write failed
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether a caller may reasonably retry the same operation unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExErrorKind::Persistence | ExErrorKind::Io)
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation name,
/// entity and field) for logging and user-facing messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<i64>,
    field: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            field: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (`"customer"`, `"room"` or `"booking"` plus its id)
    pub fn with_entity(mut self, entity: &'static str, id: i64) -> Self {
        self.entity = Some(entity);
        self.entity_id = Some(id);
        self
    }

    /// Add offending field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity name, if any
    pub fn entity(&self) -> Option<&'static str> {
        self.entity
    }

    /// Get the entity id, if any
    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let (Some(entity), Some(id)) = (self.entity, self.entity_id) {
            write!(f, " ({} {})", entity, id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for hotel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotelError {
    // ===== Validation Errors =====
    /// Customer name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Customer phone is empty or whitespace-only
    #[error("Invalid phone: {reason}")]
    InvalidPhone { reason: String },

    /// Room number is empty or whitespace-only
    #[error("Invalid room number: {reason}")]
    InvalidRoomNumber { reason: String },

    /// Room type is empty or whitespace-only
    #[error("Invalid room type: {reason}")]
    InvalidRoomType { reason: String },

    /// Room price is negative, NaN or infinite
    #[error("Invalid price {price}: must be a finite, non-negative amount")]
    InvalidPrice { price: f64 },

    /// Date field is not a `YYYY-MM-DD` calendar date
    #[error("Invalid {field}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { field: String, value: String },

    // ===== Reference Errors =====
    /// Customer not found in store
    #[error("Customer not found: {customer_id}")]
    CustomerNotFound { customer_id: CustomerId },

    /// Room not found in store
    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: RoomId },

    /// Booking not found in store
    #[error("Booking not found: {booking_id}")]
    BookingNotFound { booking_id: BookingId },

    // ===== Mutation Errors =====
    /// Cannot delete a customer that bookings still reference
    #[error("Cannot delete customer {customer_id}: referenced by {booking_count} booking(s)")]
    CustomerHasBookings {
        customer_id: CustomerId,
        booking_count: usize,
    },

    /// Cannot delete a room that bookings still reference
    #[error("Cannot delete room {room_id}: referenced by {booking_count} booking(s)")]
    RoomHasBookings { room_id: RoomId, booking_count: usize },
}

/// Conversion from HotelError to ExError
///
/// Store and engine functions return `ExError`; domain checks produce
/// `HotelError` and are lifted with `?`.
impl From<HotelError> for ExError {
    fn from(err: HotelError) -> Self {
        let message = err.to_string();
        match err {
            HotelError::InvalidName { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("name")
                .with_message(message),

            HotelError::InvalidPhone { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("phone")
                .with_message(message),

            HotelError::InvalidRoomNumber { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("room_number")
                .with_message(message),

            HotelError::InvalidRoomType { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("room_type")
                .with_message(message),

            HotelError::InvalidPrice { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("price")
                .with_message(message),

            HotelError::InvalidDate { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(field)
                .with_message(message),

            HotelError::CustomerNotFound { customer_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("customer", customer_id)
                .with_message(message),

            HotelError::RoomNotFound { room_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("room", room_id)
                .with_message(message),

            HotelError::BookingNotFound { booking_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity("booking", booking_id)
                .with_message(message),

            HotelError::CustomerHasBookings { customer_id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity("customer", customer_id)
                    .with_message(message)
            }

            HotelError::RoomHasBookings { room_id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity("room", room_id)
                    .with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("delete_room")
            .with_entity("room", 7)
            .with_message("Room not found: 7");

        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'delete_room': Room not found: 7 (room 7)"
        );
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);

        let source = std::error::Error::source(&outer).expect("source should be set");
        assert!(source.to_string().contains("disk I/O error"));
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::Persistence)
        );
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(ExErrorKind::Persistence.is_retryable());
        assert!(!ExErrorKind::InvalidInput.is_retryable());
        assert!(!ExErrorKind::NotFound.is_retryable());
    }
}
