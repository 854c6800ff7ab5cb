//! Outbound persistence adapters backed by PostgreSQL via Diesel.

mod diesel_basic_error_mapping;
mod diesel_enrollment_repository;
mod diesel_hotel_repository;
mod diesel_ticket_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use diesel_hotel_repository::DieselHotelRepository;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
