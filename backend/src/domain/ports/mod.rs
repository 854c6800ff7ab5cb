//! Domain ports and supporting types for the hexagonal boundary.

mod enrollment_repository;
mod hotel_repository;
mod hotels_query;
mod ticket_repository;

#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use enrollment_repository::{
    EnrollmentRepository, EnrollmentRepositoryError, FixtureEnrollmentRepository,
};
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{FixtureHotelRepository, HotelRepository, HotelRepositoryError};
#[cfg(test)]
pub use hotels_query::MockHotelsQuery;
pub use hotels_query::{FixtureHotelsQuery, HotelsQuery};
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{FixtureTicketRepository, TicketRepository, TicketRepositoryError};
