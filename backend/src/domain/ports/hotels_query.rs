//! Driving port for hotel browsing.
//!
//! Inbound adapters (HTTP handlers) consume this port so they depend on the
//! use-case, not on repositories or the eligibility rule. Production backs
//! it with [`crate::domain::HotelsService`]; tests substitute mocks.

use async_trait::async_trait;

use crate::domain::{Error, Hotel, HotelWithRooms, UserId};

/// Domain use-case port for browsing hotels.
///
/// Both operations gate on the caller's enrollment and ticket before any
/// catalog read happens; an ineligible user never observes catalog state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsQuery: Send + Sync {
    /// Return all hotels visible to `user_id`.
    async fn get_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error>;

    /// Return one hotel with its rooms, if visible to `user_id`.
    async fn get_hotel(&self, user_id: UserId, hotel_id: i32) -> Result<HotelWithRooms, Error>;
}

/// Fixture query used until persistence is wired.
///
/// Mirrors an empty platform: no enrollments exist, so every request fails
/// the existence check.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelsQuery;

#[async_trait]
impl HotelsQuery for FixtureHotelsQuery {
    async fn get_hotels(&self, _user_id: UserId) -> Result<Vec<Hotel>, Error> {
        Err(Error::not_found("No result for this search!"))
    }

    async fn get_hotel(&self, _user_id: UserId, _hotel_id: i32) -> Result<HotelWithRooms, Error> {
        Err(Error::not_found("No result for this search!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_query_misses_for_any_user() {
        let query = FixtureHotelsQuery;
        let error = query
            .get_hotels(UserId::new(7))
            .await
            .expect_err("fixture has no data");
        assert_eq!(error.code, ErrorCode::NotFound);

        let error = query
            .get_hotel(UserId::new(7), 1)
            .await
            .expect_err("fixture has no data");
        assert_eq!(error.code, ErrorCode::NotFound);
    }
}
