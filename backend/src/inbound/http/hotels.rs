//! Hotel browsing HTTP handlers.
//!
//! ```text
//! GET /hotels
//! GET /hotels/{hotelId}
//! ```
//!
//! Both endpoints require an authenticated session and are gated on the
//! caller's ticket; the eligibility rule itself lives in the domain service
//! behind [`HttpState::hotels`].

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, Hotel, HotelWithRooms, Room};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Hotel payload returned by the list and detail endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    /// Hotel identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Cover image reference.
    pub image: String,
    /// ISO 8601 creation timestamp.
    #[schema(example = "2026-01-15T12:00:00+00:00")]
    pub created_at: String,
    /// ISO 8601 modification timestamp.
    #[schema(example = "2026-01-15T12:00:00+00:00")]
    pub updated_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_rfc3339(),
            updated_at: hotel.updated_at.to_rfc3339(),
        }
    }
}

/// Room payload embedded in the hotel detail response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    /// Room identifier.
    pub id: i32,
    /// Display name, typically the room number.
    pub name: String,
    /// Number of guests the room sleeps.
    pub capacity: i32,
    /// Owning hotel identifier.
    pub hotel_id: i32,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 modification timestamp.
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id,
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

/// Hotel detail payload with the embedded room collection.
///
/// The room collection serialises under the capitalised `Rooms` key; that is
/// the platform's published contract for this endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailResponse {
    /// Hotel identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Cover image reference.
    pub image: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 modification timestamp.
    pub updated_at: String,
    /// Rooms belonging to the hotel, unordered.
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelDetailResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at.to_rfc3339(),
            updated_at: hotel.updated_at.to_rfc3339(),
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

/// Parse the `{hotelId}` path segment.
///
/// A non-numeric id cannot match any stored hotel, so the contract maps it
/// to 404 rather than actix's default 400 for a path type mismatch.
fn parse_hotel_id(raw: &str) -> Result<i32, Error> {
    raw.parse()
        .map_err(|_| Error::not_found("No result for this search!"))
}

/// List all hotels visible to the authenticated user.
#[utoipa::path(
    get,
    path = "/hotels",
    responses(
        (status = 200, description = "Hotels", body = [HotelResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 402, description = "Ticket does not grant hotel access", body = ErrorSchema),
        (status = 404, description = "No enrollment, ticket, or hotels", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "listHotels",
    security(("SessionCookie" = []))
)]
#[get("/hotels")]
pub async fn list_hotels(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<HotelResponse>>> {
    let user_id = session.require_user_id()?;
    let hotels = state.hotels.get_hotels(user_id).await?;
    Ok(web::Json(
        hotels.into_iter().map(HotelResponse::from).collect(),
    ))
}

/// Fetch one hotel with its rooms.
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    params(
        ("hotelId" = String, Path, description = "Hotel identifier")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelDetailResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 402, description = "Ticket does not grant hotel access", body = ErrorSchema),
        (status = 404, description = "No enrollment, ticket, or matching hotel", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "getHotel",
    security(("SessionCookie" = []))
)]
#[get("/hotels/{hotelId}")]
pub async fn get_hotel(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<HotelDetailResponse>> {
    let user_id = session.require_user_id()?;
    let hotel_id = parse_hotel_id(&path.into_inner())?;
    let hotel = state.hotels.get_hotel(user_id, hotel_id).await?;
    Ok(web::Json(HotelDetailResponse::from(hotel)))
}
