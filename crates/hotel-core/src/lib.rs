//! Hotel Core - domain model, validation rules, error and logging facilities
//!
//! This crate provides the foundational pieces shared by the store, engine
//! and CLI crates:
//! - Customer, Room and Booking models plus their input drafts
//! - Validation rules applied before anything reaches storage
//! - The structured error facility (`ExError`, `ExErrorKind`) and the
//!   domain error taxonomy (`HotelError`)
//! - The logging facility (`init`, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-exported for the logging macros
#[doc(hidden)]
pub use hotel_core_types as core_types;
#[doc(hidden)]
pub use tracing;

pub use errors::{ExError, ExErrorKind, HotelError, Result};
pub use model::{
    Booking, BookingId, Customer, CustomerId, NewBooking, NewCustomer, NewRoom, Room, RoomId,
};
