//! Endpoint tests for hotel browsing.
//!
//! Drives the handlers through a real Actix app with session middleware and
//! scripted stub repositories, covering the full 401/404/402/200 matrix for
//! `GET /hotels` and `GET /hotels/{hotelId}`.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test, web};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use eventstay_backend::domain::ports::{
    EnrollmentRepository, EnrollmentRepositoryError, HotelRepository, HotelRepositoryError,
    TicketRepository, TicketRepositoryError,
};
use eventstay_backend::domain::{
    Enrollment, Error, Hotel, HotelWithRooms, HotelsService, Room, Ticket, TicketStatus,
    TicketType, UserId,
};
use eventstay_backend::inbound::http::hotels::{get_hotel, list_hotels};
use eventstay_backend::inbound::http::session::SessionContext;
use eventstay_backend::inbound::http::state::HttpState;

const USER: UserId = UserId::new(42);
const ENROLLMENT_ID: i32 = 7;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 2, 18, 40, 11)
        .single()
        .expect("valid timestamp")
}

/// Scripted storage contents backing one test app.
#[derive(Clone, Default)]
struct World {
    enrollment: Option<Enrollment>,
    ticket: Option<Ticket>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

impl World {
    fn enrolled(mut self) -> Self {
        self.enrollment = Some(Enrollment {
            id: ENROLLMENT_ID,
            user_id: USER,
        });
        self
    }

    fn with_ticket(mut self, status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Self {
        self.ticket = Some(Ticket {
            id: 11,
            enrollment_id: ENROLLMENT_ID,
            status,
            ticket_type: TicketType {
                id: 3,
                is_remote,
                includes_hotel,
            },
        });
        self
    }

    fn eligible(self) -> Self {
        self.enrolled().with_ticket(TicketStatus::Paid, false, true)
    }

    fn with_hotel(mut self) -> Self {
        self.hotels.push(Hotel {
            id: 5,
            name: "Grand Plaza".to_owned(),
            image: "https://cdn.example.test/hotels/5.jpg".to_owned(),
            created_at: fixed_time(),
            updated_at: fixed_time(),
        });
        self
    }

    fn with_rooms(mut self) -> Self {
        self.rooms.extend([
            Room {
                id: 10,
                name: "101".to_owned(),
                capacity: 2,
                hotel_id: 5,
                created_at: fixed_time(),
                updated_at: fixed_time(),
            },
            Room {
                id: 11,
                name: "102".to_owned(),
                capacity: 3,
                hotel_id: 5,
                created_at: fixed_time(),
                updated_at: fixed_time(),
            },
        ]);
        self
    }
}

#[derive(Clone)]
struct StubEnrollments(Option<Enrollment>);

#[async_trait]
impl EnrollmentRepository for StubEnrollments {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        Ok(self.0.clone().filter(|e| e.user_id == user_id))
    }
}

#[derive(Clone)]
struct StubTickets(Option<Ticket>);

#[async_trait]
impl TicketRepository for StubTickets {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(self.0.clone().filter(|t| t.enrollment_id == enrollment_id))
    }
}

#[derive(Clone)]
struct StubHotels {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

#[async_trait]
impl HotelRepository for StubHotels {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        Ok(self.hotels.clone())
    }

    async fn find_by_id_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        Ok(self
            .hotels
            .iter()
            .find(|hotel| hotel.id == hotel_id)
            .map(|hotel| HotelWithRooms {
                hotel: hotel.clone(),
                rooms: self
                    .rooms
                    .iter()
                    .filter(|room| room.hotel_id == hotel_id)
                    .cloned()
                    .collect(),
            }))
    }
}

fn test_app(
    world: World,
) -> App<
    impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;

    let service = HotelsService::new(
        Arc::new(StubEnrollments(world.enrollment)),
        Arc::new(StubTickets(world.ticket)),
        Arc::new(StubHotels {
            hotels: world.hotels,
            rooms: world.rooms,
        }),
    );
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    App::new()
        .wrap(session)
        .app_data(web::Data::new(HttpState::new(Arc::new(service))))
        .route(
            "/test/session",
            web::get().to(|session: SessionContext| async move {
                session.persist_user(USER)?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        )
        .service(list_hotels)
        .service(get_hotel)
}

async fn session_cookie<S>(app: &S) -> actix_web::cookie::Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let res = test::call_service(
        app,
        test::TestRequest::get().uri("/test/session").to_request(),
    )
    .await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Run a GET against a fresh app for `world` with a valid session.
async fn get_with_session(world: World, path: &str) -> (StatusCode, Value) {
    let app = test::init_service(test_app(world)).await;
    let cookie = session_cookie(&app).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri(path).cookie(cookie).to_request(),
    )
    .await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn expected_hotel_json() -> Value {
    json!({
        "id": 5,
        "name": "Grand Plaza",
        "image": "https://cdn.example.test/hotels/5.jpg",
        "createdAt": "2026-05-02T18:40:11+00:00",
        "updatedAt": "2026-05-02T18:40:11+00:00",
    })
}

// --- GET /hotels -----------------------------------------------------------

#[actix_web::test]
async fn list_without_session_is_unauthorised() {
    let app = test::init_service(test_app(World::default().eligible().with_hotel())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/hotels").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn list_with_foreign_session_cookie_is_unauthorised() {
    // A cookie minted under another app's key cannot be decrypted here.
    let foreign_app = test::init_service(test_app(World::default())).await;
    let foreign_cookie = session_cookie(&foreign_app).await;

    let app = test::init_service(test_app(World::default().eligible().with_hotel())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/hotels")
            .cookie(foreign_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn list_for_unenrolled_user_is_not_found() {
    let (status, _) = get_with_session(World::default(), "/hotels").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_without_ticket_is_not_found() {
    let (status, _) = get_with_session(World::default().enrolled(), "/hotels").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_with_remote_ticket_is_payment_required() {
    let world = World::default()
        .enrolled()
        .with_ticket(TicketStatus::Paid, true, true)
        .with_hotel();
    let (status, body) = get_with_session(world, "/hotels").await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("payment_required")
    );
}

#[actix_web::test]
async fn list_with_ticket_not_including_hotel_is_payment_required() {
    let world = World::default()
        .enrolled()
        .with_ticket(TicketStatus::Paid, false, false)
        .with_hotel();
    let (status, _) = get_with_session(world, "/hotels").await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[actix_web::test]
async fn list_with_reserved_ticket_is_payment_required() {
    let world = World::default()
        .enrolled()
        .with_ticket(TicketStatus::Reserved, false, true)
        .with_hotel();
    let (status, _) = get_with_session(world, "/hotels").await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[actix_web::test]
async fn list_with_empty_catalog_is_not_found() {
    let (status, _) = get_with_session(World::default().eligible(), "/hotels").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_returns_the_stored_hotel_fields_exactly() {
    let (status, body) =
        get_with_session(World::default().eligible().with_hotel(), "/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([expected_hotel_json()]));
}

// --- GET /hotels/{hotelId} -------------------------------------------------

#[actix_web::test]
async fn detail_without_session_is_unauthorised() {
    let app = test::init_service(test_app(World::default().eligible().with_hotel())).await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/hotels/5").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn detail_for_unenrolled_user_is_not_found() {
    let (status, _) = get_with_session(World::default().with_hotel(), "/hotels/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn detail_without_ticket_is_not_found() {
    let (status, _) =
        get_with_session(World::default().enrolled().with_hotel(), "/hotels/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn detail_with_remote_ticket_is_payment_required() {
    let world = World::default()
        .enrolled()
        .with_ticket(TicketStatus::Paid, true, false)
        .with_hotel();
    let (status, _) = get_with_session(world, "/hotels/5").await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[actix_web::test]
async fn detail_for_unknown_hotel_is_not_found() {
    let (status, _) =
        get_with_session(World::default().eligible().with_hotel(), "/hotels/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn detail_with_non_numeric_id_is_not_found() {
    let (status, _) = get_with_session(
        World::default().eligible().with_hotel(),
        "/hotels/not-a-number",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn detail_returns_the_hotel_with_its_rooms_exactly() {
    let world = World::default().eligible().with_hotel().with_rooms();
    let (status, body) = get_with_session(world, "/hotels/5").await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = expected_hotel_json();
    expected
        .as_object_mut()
        .expect("hotel object")
        .insert(
            "Rooms".to_owned(),
            json!([
                {
                    "id": 10,
                    "name": "101",
                    "capacity": 2,
                    "hotelId": 5,
                    "createdAt": "2026-05-02T18:40:11+00:00",
                    "updatedAt": "2026-05-02T18:40:11+00:00",
                },
                {
                    "id": 11,
                    "name": "102",
                    "capacity": 3,
                    "hotelId": 5,
                    "createdAt": "2026-05-02T18:40:11+00:00",
                    "updatedAt": "2026-05-02T18:40:11+00:00",
                },
            ]),
        );
    assert_eq!(body, expected);
}

// --- ordering of checks ----------------------------------------------------

#[actix_web::test]
async fn missing_enrollment_beats_an_ineligible_ticket() {
    // The ticket would fail the payment rule, but without an enrollment the
    // existence check must win: 404, never 402.
    let world = World::default().with_ticket(TicketStatus::Reserved, true, false);
    let (status, body) = get_with_session(world, "/hotels").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}
