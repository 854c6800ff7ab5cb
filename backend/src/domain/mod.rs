//! Domain entities, errors, ports, and the hotel browsing service.
//!
//! Everything in this module is transport and storage agnostic. Inbound
//! adapters consume the [`ports::HotelsQuery`] driving port; outbound
//! adapters implement the repository ports.

pub mod enrollment;
pub mod error;
pub mod hotel;
pub mod hotels_service;
pub mod ports;

pub use self::enrollment::{
    Enrollment, ParseTicketStatusError, Ticket, TicketStatus, TicketType, UserId,
};
pub use self::error::{Error, ErrorCode};
pub use self::hotel::{Hotel, HotelWithRooms, Room};
pub use self::hotels_service::HotelsService;
