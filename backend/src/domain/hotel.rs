//! Hotel catalog data model.

use chrono::{DateTime, Utc};

/// A hotel offered to eligible in-person attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    /// Primary key of the hotel record.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Reference to the hotel's cover image.
    pub image: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A bookable room belonging to a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Primary key of the room record.
    pub id: i32,
    /// Display name, typically the room number.
    pub name: String,
    /// Number of guests the room sleeps.
    pub capacity: i32,
    /// Owning hotel.
    pub hotel_id: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with its eagerly loaded room collection.
///
/// Rooms are unordered; the detail endpoint returns them as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    /// The hotel record.
    pub hotel: Hotel,
    /// All rooms belonging to the hotel.
    pub rooms: Vec<Room>,
}
