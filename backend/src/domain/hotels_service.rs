//! Hotel browsing domain service.
//!
//! Implements the [`HotelsQuery`] driving port: verify the caller's
//! enrollment and ticket, then read the catalog. The verification step runs
//! first on every request and a failure prevents any catalog read, so
//! ineligible users never observe hotel data, not even its absence.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    EnrollmentRepository, EnrollmentRepositoryError, HotelRepository, HotelRepositoryError,
    HotelsQuery, TicketRepository, TicketRepositoryError,
};
use crate::domain::{Error, Hotel, HotelWithRooms, UserId};

fn no_result() -> Error {
    Error::not_found("No result for this search!")
}

fn requirements_not_met() -> Error {
    Error::payment_required("You do not fulfill requirements for access here!")
}

fn map_enrollment_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("enrollment repository unavailable: {message}"))
        }
        EnrollmentRepositoryError::Query { message } => {
            Error::internal(format!("enrollment repository error: {message}"))
        }
    }
}

fn map_ticket_error(error: TicketRepositoryError) -> Error {
    match error {
        TicketRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("ticket repository unavailable: {message}"))
        }
        TicketRepositoryError::Query { message } => {
            Error::internal(format!("ticket repository error: {message}"))
        }
    }
}

fn map_hotel_error(error: HotelRepositoryError) -> Error {
    match error {
        HotelRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hotel repository unavailable: {message}"))
        }
        HotelRepositoryError::Query { message } => {
            Error::internal(format!("hotel repository error: {message}"))
        }
    }
}

/// Eligibility-gated hotel query service.
#[derive(Clone)]
pub struct HotelsService<E, T, H> {
    enrollments: Arc<E>,
    tickets: Arc<T>,
    hotels: Arc<H>,
}

impl<E, T, H> HotelsService<E, T, H> {
    /// Create a new service over the three read repositories.
    pub fn new(enrollments: Arc<E>, tickets: Arc<T>, hotels: Arc<H>) -> Self {
        Self {
            enrollments,
            tickets,
            hotels,
        }
    }
}

impl<E, T, H> HotelsService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    /// Check that `user_id` may see hotel data.
    ///
    /// Existence checks run strictly before the business rule: a user with
    /// no enrollment or no ticket gets `NotFound`, never `PaymentRequired`.
    async fn verify_enrollment_and_ticket(&self, user_id: UserId) -> Result<(), Error> {
        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await
            .map_err(map_enrollment_error)?
            .ok_or_else(no_result)?;

        let ticket = self
            .tickets
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(map_ticket_error)?
            .ok_or_else(no_result)?;

        if !ticket.grants_hotel_access() {
            return Err(requirements_not_met());
        }
        Ok(())
    }
}

#[async_trait]
impl<E, T, H> HotelsQuery for HotelsService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    async fn get_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error> {
        self.verify_enrollment_and_ticket(user_id).await?;

        let hotels = self.hotels.list().await.map_err(map_hotel_error)?;
        // An empty catalog is "nothing to show", not a valid empty success.
        if hotels.is_empty() {
            return Err(no_result());
        }
        Ok(hotels)
    }

    async fn get_hotel(&self, user_id: UserId, hotel_id: i32) -> Result<HotelWithRooms, Error> {
        self.verify_enrollment_and_ticket(user_id).await?;

        self.hotels
            .find_by_id_with_rooms(hotel_id)
            .await
            .map_err(map_hotel_error)?
            .ok_or_else(no_result)
    }
}

#[cfg(test)]
#[path = "hotels_service_tests.rs"]
mod tests;
