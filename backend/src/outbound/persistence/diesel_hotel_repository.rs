//! PostgreSQL-backed `HotelRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelWithRooms, Room};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HotelRow, RoomRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hotels, rooms};

/// Diesel-backed implementation of the hotel repository port.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HotelRepositoryError {
    map_basic_pool_error(error, |message| HotelRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> HotelRepositoryError {
    map_basic_diesel_error(
        error,
        HotelRepositoryError::query,
        HotelRepositoryError::connection,
    )
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row_list: Vec<HotelRow> = hotels::table
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_list.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let hotel_row = hotels::table
            .filter(hotels::id.eq(hotel_id))
            .select(HotelRow::as_select())
            .first::<HotelRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(hotel_row) = hotel_row else {
            return Ok(None);
        };

        // Two reads on one checked-out connection; the room collection is
        // eagerly loaded so callers never issue a second query.
        let room_rows: Vec<RoomRow> = rooms::table
            .filter(rooms::hotel_id.eq(hotel_id))
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from(hotel_row),
            rooms: room_rows.into_iter().map(Room::from).collect(),
        }))
    }
}
