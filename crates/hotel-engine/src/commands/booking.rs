//! Booking operations and their room-availability side effects
//!
//! `add_booking` marks the booked room occupied and `delete_booking` marks
//! it available again, each in the same transaction as the booking row.
//! `update_booking` leaves availability alone, even when the room changes.

#![allow(clippy::result_large_err)]

use crate::repository::{ensure_customer_exists, ensure_room_exists, finish_op, Repository};
use hotel_core::model::{Booking, BookingId, NewBooking, RoomId};
use hotel_core::{log_op_start, HotelError};
use hotel_store::errors::{from_rusqlite, Result};
use hotel_store::SqliteRepo;
use std::time::Instant;

impl Repository {
    /// Record a booking and mark its room unavailable
    ///
    /// The room's current availability is not checked.
    ///
    /// # Errors
    /// - `NotFound`: the customer or room does not exist (nothing is written)
    /// - `Persistence`: database error
    pub fn add_booking(&mut self, booking: NewBooking) -> Result<Booking> {
        log_op_start!(
            "add_booking",
            customer_id = booking.customer_id,
            room_id = booking.room_id
        );
        let start = Instant::now();

        let result = (|| -> Result<_> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;

            ensure_customer_exists(&tx, booking.customer_id)?;
            ensure_room_exists(&tx, booking.room_id)?;

            let created = SqliteRepo::insert_booking(&tx, &booking)?;
            SqliteRepo::set_room_availability(&tx, created.room_id, false)?;

            tx.commit().map_err(from_rusqlite)?;
            Ok(created)
        })();

        finish_op("add_booking", start, result)
    }

    /// All bookings ordered by id
    pub fn get_bookings(&self) -> Result<Vec<Booking>> {
        log_op_start!("get_bookings");
        let start = Instant::now();

        let result = SqliteRepo::list_bookings(&self.conn);
        finish_op("get_bookings", start, result)
    }

    /// One booking by id
    pub fn get_booking(&self, booking_id: BookingId) -> Result<Booking> {
        log_op_start!("get_booking", booking_id = booking_id);
        let start = Instant::now();

        let result = SqliteRepo::get_booking(&self.conn, booking_id).and_then(|found| {
            found.ok_or_else(|| HotelError::BookingNotFound { booking_id }.into())
        });

        finish_op("get_booking", start, result)
    }

    /// Overwrite every field of a booking
    ///
    /// Also repairs a booking whose stored dates are unreadable.
    ///
    /// # Errors
    /// - `NotFound`: the booking, or the new customer or room, does not exist
    pub fn update_booking(&mut self, booking_id: BookingId, booking: NewBooking) -> Result<Booking> {
        log_op_start!(
            "update_booking",
            booking_id = booking_id,
            customer_id = booking.customer_id,
            room_id = booking.room_id
        );
        let start = Instant::now();

        let result = (|| -> Result<_> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;

            if SqliteRepo::get_booking_room_id(&tx, booking_id)?.is_none() {
                return Err(HotelError::BookingNotFound { booking_id }.into());
            }
            ensure_customer_exists(&tx, booking.customer_id)?;
            ensure_room_exists(&tx, booking.room_id)?;

            SqliteRepo::update_booking(&tx, booking_id, &booking)?;
            tx.commit().map_err(from_rusqlite)?;
            Ok(booking.into_booking(booking_id))
        })();

        finish_op("update_booking", start, result)
    }

    /// Delete a booking and mark the room it referenced available
    ///
    /// The room becomes available even if other bookings still reference it.
    /// Only the room reference is read, so a booking with unreadable stored
    /// dates can still be deleted. Returns the room that was freed.
    ///
    /// # Errors
    /// `NotFound` if no booking has this id.
    pub fn delete_booking(&mut self, booking_id: BookingId) -> Result<RoomId> {
        log_op_start!("delete_booking", booking_id = booking_id);
        let start = Instant::now();

        let result = (|| -> Result<_> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;

            // Room id must be read before the row goes away
            let room_id = SqliteRepo::get_booking_room_id(&tx, booking_id)?
                .ok_or(HotelError::BookingNotFound { booking_id })?;

            SqliteRepo::delete_booking(&tx, booking_id)?;
            SqliteRepo::set_room_availability(&tx, room_id, true)?;

            tx.commit().map_err(from_rusqlite)?;
            Ok(room_id)
        })();

        finish_op("delete_booking", start, result)
    }
}
