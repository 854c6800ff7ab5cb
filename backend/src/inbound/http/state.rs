//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::HotelsQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Driving port for hotel browsing.
    pub hotels: Arc<dyn HotelsQuery>,
}

impl HttpState {
    /// Construct state from the hotel browsing port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use eventstay_backend::domain::ports::FixtureHotelsQuery;
    /// use eventstay_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureHotelsQuery));
    /// let _hotels = state.hotels.clone();
    /// ```
    pub fn new(hotels: Arc<dyn HotelsQuery>) -> Self {
        Self { hotels }
    }
}
