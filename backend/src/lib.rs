//! Eligibility-gated hotel browsing backend for the Eventstay platform.
//!
//! Exposes two read-only REST endpoints, `GET /hotels` and
//! `GET /hotels/{hotelId}`, gated on the caller's enrollment and ticket.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a `Trace-Id` to every response.
pub use middleware::Trace;
