use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use super::room::RoomId;
use crate::errors::Result;
use crate::rules::validation::parse_date;

/// Booking identity, assigned by the store on insert
pub type BookingId = i64;

/// Canonical on-disk and on-screen date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A reservation of one room by one customer
///
/// Dates are not ordered or checked for overlap with other bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// Field values for creating or overwriting a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl NewBooking {
    pub fn new(
        customer_id: CustomerId,
        room_id: RoomId,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            customer_id,
            room_id,
            check_in_date,
            check_out_date,
        }
    }

    /// Build a booking draft from raw `YYYY-MM-DD` text
    ///
    /// # Errors
    /// Returns `HotelError::InvalidDate` naming the first field that does not parse.
    pub fn parse(
        customer_id: CustomerId,
        room_id: RoomId,
        check_in: &str,
        check_out: &str,
    ) -> Result<Self> {
        Ok(Self {
            customer_id,
            room_id,
            check_in_date: parse_date("check_in_date", check_in)?,
            check_out_date: parse_date("check_out_date", check_out)?,
        })
    }

    /// Attach an identity, producing the stored record
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            customer_id: self.customer_id,
            room_id: self.room_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
        }
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} customer {} room {} {} -> {}",
            self.id,
            self.customer_id,
            self.room_id,
            self.check_in_date.format(DATE_FORMAT),
            self.check_out_date.format(DATE_FORMAT)
        )
    }
}
