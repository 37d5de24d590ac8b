use chrono::NaiveDate;

use crate::errors::{HotelError, Result};
use crate::model::booking::DATE_FORMAT;
use crate::model::{NewCustomer, NewRoom};

/// Validate a customer draft
///
/// Name and phone must both contain at least one non-whitespace character.
/// The phone number format is otherwise free-form.
///
/// # Errors
/// Returns `InvalidName` or `InvalidPhone` for the first blank field.
pub fn validate_new_customer(customer: &NewCustomer) -> Result<()> {
    if customer.name.trim().is_empty() {
        return Err(HotelError::InvalidName {
            reason: "name cannot be empty".to_string(),
        });
    }

    if customer.phone.trim().is_empty() {
        return Err(HotelError::InvalidPhone {
            reason: "phone cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate a room draft
///
/// # Errors
/// Returns `InvalidRoomNumber` / `InvalidRoomType` for blank text fields and
/// `InvalidPrice` for a negative, NaN or infinite price.
pub fn validate_new_room(room: &NewRoom) -> Result<()> {
    if room.room_number.trim().is_empty() {
        return Err(HotelError::InvalidRoomNumber {
            reason: "room number cannot be empty".to_string(),
        });
    }

    if room.room_type.trim().is_empty() {
        return Err(HotelError::InvalidRoomType {
            reason: "room type cannot be empty".to_string(),
        });
    }

    validate_price(room.price)
}

/// Validate a nightly price
///
/// # Errors
/// Returns `InvalidPrice` unless the price is finite and `>= 0`.
pub fn validate_price(price: f64) -> Result<()> {
    // NaN fails both comparisons, so check finiteness first
    if !price.is_finite() || price < 0.0 {
        return Err(HotelError::InvalidPrice { price });
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date, tolerating surrounding whitespace
///
/// # Errors
/// Returns `InvalidDate` carrying the field name and the rejected text.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| HotelError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
