//! SQLite repository implementation
//!
//! Row-level SQL for the customers, rooms and bookings tables. Functions take
//! `&Connection`; a `rusqlite::Transaction` derefs to one, so the same calls
//! compose inside a caller-owned transaction.
//!
//! Updates and deletes report the number of affected rows and leave the
//! "missing id" decision to the caller.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, stored_date_error, Result};
use chrono::NaiveDate;
use hotel_core::model::{
    Booking, BookingId, Customer, CustomerId, NewBooking, NewCustomer, NewRoom, Room, RoomId,
};
use hotel_core::rules::parse_date;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// SQLite repository for customers, rooms and bookings
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== Customers =====

    /// Insert a customer and return it with its assigned id
    pub fn insert_customer(conn: &Connection, customer: &NewCustomer) -> Result<Customer> {
        conn.execute(
            "INSERT INTO customers (name, phone) VALUES (?1, ?2)",
            params![customer.name, customer.phone],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(customer_id = id, "inserted customer row");
        Ok(customer.clone().into_customer(id))
    }

    /// Get a customer by id
    pub fn get_customer(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
        conn.query_row(
            "SELECT id, name, phone FROM customers WHERE id = ?1",
            [id],
            customer_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all customers ordered by id
    pub fn list_customers(conn: &Connection) -> Result<Vec<Customer>> {
        query_all(
            conn,
            "SELECT id, name, phone FROM customers ORDER BY id",
            customer_from_row,
        )
    }

    /// Overwrite a customer's fields; returns rows affected (0 or 1)
    pub fn update_customer(
        conn: &Connection,
        id: CustomerId,
        customer: &NewCustomer,
    ) -> Result<usize> {
        conn.execute(
            "UPDATE customers SET name = ?1, phone = ?2 WHERE id = ?3",
            params![customer.name, customer.phone, id],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a customer; returns rows affected (0 or 1)
    pub fn delete_customer(conn: &Connection, id: CustomerId) -> Result<usize> {
        conn.execute("DELETE FROM customers WHERE id = ?1", [id])
            .map_err(from_rusqlite)
    }

    // ===== Rooms =====

    /// Insert a room (available) and return it with its assigned id
    pub fn insert_room(conn: &Connection, room: &NewRoom) -> Result<Room> {
        // availability takes the column default
        conn.execute(
            "INSERT INTO rooms (room_number, room_type, price) VALUES (?1, ?2, ?3)",
            params![room.room_number, room.room_type, room.price],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(room_id = id, "inserted room row");

        // Re-read so the returned record reflects the stored default
        Self::get_room(conn, id)?.ok_or_else(|| {
            hotel_core::ExError::new(hotel_core::ExErrorKind::Internal)
                .with_op("insert_room")
                .with_entity("room", id)
                .with_message("inserted room row not readable")
        })
    }

    /// Get a room by id
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        conn.query_row(
            "SELECT id, room_number, room_type, price, availability FROM rooms WHERE id = ?1",
            [id],
            room_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all rooms ordered by id
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        query_all(
            conn,
            "SELECT id, room_number, room_type, price, availability FROM rooms ORDER BY id",
            room_from_row,
        )
    }

    /// Overwrite all of a room's fields, availability included
    pub fn update_room(
        conn: &Connection,
        id: RoomId,
        room: &NewRoom,
        availability: bool,
    ) -> Result<usize> {
        conn.execute(
            "UPDATE rooms SET room_number = ?1, room_type = ?2, price = ?3, availability = ?4
             WHERE id = ?5",
            params![room.room_number, room.room_type, room.price, availability, id],
        )
        .map_err(from_rusqlite)
    }

    /// Set only the availability flag
    pub fn set_room_availability(conn: &Connection, id: RoomId, available: bool) -> Result<usize> {
        let changed = conn
            .execute(
                "UPDATE rooms SET availability = ?1 WHERE id = ?2",
                params![available, id],
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(room_id = id, available, changed, "set room availability");
        Ok(changed)
    }

    /// Delete a room; returns rows affected (0 or 1)
    pub fn delete_room(conn: &Connection, id: RoomId) -> Result<usize> {
        conn.execute("DELETE FROM rooms WHERE id = ?1", [id])
            .map_err(from_rusqlite)
    }

    // ===== Bookings =====

    /// Insert a booking row and return it with its assigned id
    ///
    /// Does not touch room availability; see the engine for that side effect.
    pub fn insert_booking(conn: &Connection, booking: &NewBooking) -> Result<Booking> {
        conn.execute(
            "INSERT INTO bookings (customer_id, room_id, check_in_date, check_out_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                booking.customer_id,
                booking.room_id,
                booking.check_in_date,
                booking.check_out_date,
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(booking_id = id, room_id = booking.room_id, "inserted booking row");
        Ok(booking.clone().into_booking(id))
    }

    /// Get a booking by id
    ///
    /// A stored date that is not `YYYY-MM-DD` is an `InvalidInput` error
    /// naming the booking.
    pub fn get_booking(conn: &Connection, id: BookingId) -> Result<Option<Booking>> {
        conn.query_row(
            "SELECT id, customer_id, room_id, check_in_date, check_out_date
             FROM bookings WHERE id = ?1",
            [id],
            booking_row_from_row,
        )
        .optional()
        .map_err(from_rusqlite)?
        .map(BookingRow::into_booking)
        .transpose()
    }

    /// Room referenced by a booking, read without decoding its dates
    pub fn get_booking_room_id(conn: &Connection, id: BookingId) -> Result<Option<RoomId>> {
        conn.query_row(
            "SELECT room_id FROM bookings WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all bookings ordered by id
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        query_all(
            conn,
            "SELECT id, customer_id, room_id, check_in_date, check_out_date
             FROM bookings ORDER BY id",
            booking_row_from_row,
        )?
        .into_iter()
        .map(BookingRow::into_booking)
        .collect()
    }

    /// Overwrite a booking's fields; returns rows affected (0 or 1)
    pub fn update_booking(conn: &Connection, id: BookingId, booking: &NewBooking) -> Result<usize> {
        conn.execute(
            "UPDATE bookings SET customer_id = ?1, room_id = ?2, check_in_date = ?3, check_out_date = ?4
             WHERE id = ?5",
            params![
                booking.customer_id,
                booking.room_id,
                booking.check_in_date,
                booking.check_out_date,
                id,
            ],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a booking; returns rows affected (0 or 1)
    pub fn delete_booking(conn: &Connection, id: BookingId) -> Result<usize> {
        conn.execute("DELETE FROM bookings WHERE id = ?1", [id])
            .map_err(from_rusqlite)
    }

    /// Count bookings that reference a customer
    pub fn count_bookings_for_customer(conn: &Connection, id: CustomerId) -> Result<usize> {
        count(
            conn,
            "SELECT COUNT(*) FROM bookings WHERE customer_id = ?1",
            id,
        )
    }

    /// Count bookings that reference a room
    pub fn count_bookings_for_room(conn: &Connection, id: RoomId) -> Result<usize> {
        count(conn, "SELECT COUNT(*) FROM bookings WHERE room_id = ?1", id)
    }
}

fn customer_from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
    })
}

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_number: row.get(1)?,
        room_type: row.get(2)?,
        price: row.get(3)?,
        availability: row.get(4)?,
    })
}

/// Booking as stored, dates still text
struct BookingRow {
    id: BookingId,
    customer_id: CustomerId,
    room_id: RoomId,
    check_in_date: String,
    check_out_date: String,
}

impl BookingRow {
    fn into_booking(self) -> Result<Booking> {
        Ok(Booking {
            check_in_date: stored_date(self.id, "check_in_date", &self.check_in_date)?,
            check_out_date: stored_date(self.id, "check_out_date", &self.check_out_date)?,
            id: self.id,
            customer_id: self.customer_id,
            room_id: self.room_id,
        })
    }
}

fn booking_row_from_row(row: &Row<'_>) -> rusqlite::Result<BookingRow> {
    Ok(BookingRow {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        room_id: row.get(2)?,
        check_in_date: row.get(3)?,
        check_out_date: row.get(4)?,
    })
}

fn stored_date(booking_id: BookingId, field: &str, value: &str) -> Result<NaiveDate> {
    parse_date(field, value).map_err(|e| stored_date_error(booking_id, field, value, e.into()))
}

fn query_all<T>(
    conn: &Connection,
    sql: &str,
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn count(conn: &Connection, sql: &str, id: i64) -> Result<usize> {
    let n: i64 = conn
        .query_row(sql, [id], |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(n as usize)
}
