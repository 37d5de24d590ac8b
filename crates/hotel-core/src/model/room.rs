use serde::{Deserialize, Serialize};

/// Room identity, assigned by the store on insert
pub type RoomId = i64;

/// A bookable room
///
/// `availability` is a single flag, not per-date occupancy. Creating a
/// booking clears it and deleting that booking sets it again; `update_room`
/// may also set it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,

    /// Door number as shown to guests (e.g. "101")
    pub room_number: String,

    /// Free-form category (e.g. "Single", "Suite")
    pub room_type: String,

    /// Nightly price, finite and non-negative
    pub price: f64,

    /// true = bookable, false = occupied
    pub availability: bool,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.availability
    }
}

/// Field values for creating a room; new rooms always start available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub price: f64,
}

impl NewRoom {
    pub fn new(room_number: impl Into<String>, room_type: impl Into<String>, price: f64) -> Self {
        Self {
            room_number: room_number.into(),
            room_type: room_type.into(),
            price,
        }
    }

    /// Attach an identity and availability, producing the stored record
    pub fn into_room(self, id: RoomId, availability: bool) -> Room {
        Room {
            id,
            room_number: self.room_number,
            room_type: self.room_type,
            price: self.price,
            availability,
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} room {} [{}] {:.2} - {}",
            self.id,
            self.room_number,
            self.room_type,
            self.price,
            if self.availability {
                "available"
            } else {
                "occupied"
            }
        )
    }
}
