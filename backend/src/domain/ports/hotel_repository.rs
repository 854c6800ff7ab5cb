//! Read-side port for the hotel catalog.
//!
//! The catalog is strictly read-only from this service's perspective; both
//! operations are single lookups with no filtering or ordering beyond
//! natural storage order.

use async_trait::async_trait;

use crate::domain::{Hotel, HotelWithRooms};

/// Errors raised when reading the hotel catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotelRepositoryError {
    /// Repository connection could not be established.
    #[error("hotel read connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query failed during execution or row conversion.
    #[error("hotel read query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl HotelRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for reading hotels and their rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Return every hotel in the catalog.
    ///
    /// An empty catalog yields an empty vector rather than an error; the
    /// service decides what emptiness means.
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Return the hotel with `hotel_id` and its room collection, if any.
    async fn find_by_id_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError>;
}

/// Fixture implementation serving an empty catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelRepository;

#[async_trait]
impl HotelRepository for FixtureHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id_with_rooms(
        &self,
        _hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        Ok(None)
    }
}
