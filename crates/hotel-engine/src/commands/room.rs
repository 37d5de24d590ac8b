//! Room operations

#![allow(clippy::result_large_err)]

use crate::repository::{ensure_room_exists, finish_op, Repository};
use hotel_core::model::{NewRoom, Room, RoomId};
use hotel_core::rules::validation::validate_new_room;
use hotel_core::{log_op_start, HotelError};
use hotel_store::errors::{from_rusqlite, Result};
use hotel_store::SqliteRepo;
use std::time::Instant;

impl Repository {
    /// Add a room; new rooms start available
    ///
    /// # Errors
    /// - `InvalidInput`: blank number or type, negative or non-finite price
    /// - `Persistence`: database error
    pub fn add_room(&mut self, room: NewRoom) -> Result<Room> {
        log_op_start!("add_room", room_number = %room.room_number);
        let start = Instant::now();

        let result = (|| -> Result<_> {
            validate_new_room(&room)?;
            SqliteRepo::insert_room(&self.conn, &room)
        })();

        finish_op("add_room", start, result)
    }

    /// All rooms ordered by id
    pub fn get_rooms(&self) -> Result<Vec<Room>> {
        log_op_start!("get_rooms");
        let start = Instant::now();

        let result = SqliteRepo::list_rooms(&self.conn);
        finish_op("get_rooms", start, result)
    }

    /// One room by id
    pub fn get_room(&self, room_id: RoomId) -> Result<Room> {
        log_op_start!("get_room", room_id = room_id);
        let start = Instant::now();

        let result = SqliteRepo::get_room(&self.conn, room_id)
            .and_then(|found| found.ok_or_else(|| HotelError::RoomNotFound { room_id }.into()));

        finish_op("get_room", start, result)
    }

    /// Overwrite every field of a room, availability included
    ///
    /// Availability is set exactly as given; existing bookings are not consulted.
    ///
    /// # Errors
    /// - `InvalidInput`: same rules as [`Repository::add_room`]
    /// - `NotFound`: no room has this id
    pub fn update_room(&mut self, room_id: RoomId, room: NewRoom, availability: bool) -> Result<Room> {
        log_op_start!("update_room", room_id = room_id, availability = availability);
        let start = Instant::now();

        let result = (|| -> Result<_> {
            validate_new_room(&room)?;
            match SqliteRepo::update_room(&self.conn, room_id, &room, availability)? {
                0 => Err(HotelError::RoomNotFound { room_id }.into()),
                _ => Ok(room.into_room(room_id, availability)),
            }
        })();

        finish_op("update_room", start, result)
    }

    /// Delete a room that no booking references
    ///
    /// # Errors
    /// - `NotFound`: no room has this id
    /// - `ConstraintViolation`: bookings still reference the room
    pub fn delete_room(&mut self, room_id: RoomId) -> Result<()> {
        log_op_start!("delete_room", room_id = room_id);
        let start = Instant::now();

        let result = (|| -> Result<_> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;

            ensure_room_exists(&tx, room_id)?;
            let booking_count = SqliteRepo::count_bookings_for_room(&tx, room_id)?;
            if booking_count > 0 {
                return Err(HotelError::RoomHasBookings {
                    room_id,
                    booking_count,
                }
                .into());
            }

            SqliteRepo::delete_room(&tx, room_id)?;
            tx.commit().map_err(from_rusqlite)
        })();

        finish_op("delete_room", start, result)
    }
}
