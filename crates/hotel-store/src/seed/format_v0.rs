//! Seed Format v0 schema
//!
//! Records refer to each other through file-local `key`s because database
//! ids are only assigned on insert.

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub customers: Vec<SeedCustomer>,

    #[serde(default)]
    pub rooms: Vec<SeedRoom>,

    #[serde(default)]
    pub bookings: Vec<SeedBooking>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCustomer {
    /// Key referenced by `SeedBooking::customer`
    pub key: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedRoom {
    /// Key referenced by `SeedBooking::room`
    pub key: String,
    pub room_number: String,
    pub room_type: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedBooking {
    /// Customer key
    pub customer: String,
    /// Room key
    pub room: String,
    /// `YYYY-MM-DD`
    pub check_in: String,
    /// `YYYY-MM-DD`
    pub check_out: String,
}
