//! Diesel queryable rows used by the read adapters.
//!
//! Rows select only the columns a repository needs; conversion into domain
//! values happens in the owning adapter so parse failures surface as that
//! adapter's query errors.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Hotel, Room};
use crate::outbound::persistence::schema::{enrollments, hotels, rooms, ticket_types, tickets};

/// Queryable row for enrollment lookup.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EnrollmentRow {
    pub id: i32,
    pub user_id: i32,
}

/// Queryable row for ticket lookup.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketRow {
    pub id: i32,
    pub enrollment_id: i32,
    pub status: String,
}

/// Queryable row for the ticket type joined onto a ticket.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ticket_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketTypeRow {
    pub id: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Queryable row for hotels.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Queryable row for rooms.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
