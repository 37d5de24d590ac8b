//! Domain models for the hotel store
//!
//! This module contains the persisted records and the drafts used to create them:
//! - `Customer` / `NewCustomer`
//! - `Room` / `NewRoom`
//! - `Booking` / `NewBooking`

pub mod booking;
pub mod customer;
pub mod room;

pub use booking::{Booking, BookingId, NewBooking};
pub use customer::{Customer, CustomerId, NewCustomer};
pub use room::{NewRoom, Room, RoomId};
