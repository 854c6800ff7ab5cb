//! Read-side port for ticket lookup.

use async_trait::async_trait;

use crate::domain::Ticket;

/// Errors raised when reading tickets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketRepositoryError {
    /// Repository connection could not be established.
    #[error("ticket read connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query failed during execution or row conversion.
    #[error("ticket read query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl TicketRepositoryError {
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

/// Port for looking up the ticket attached to an enrollment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Return the ticket for `enrollment_id` with its type embedded.
    ///
    /// When storage holds more than one ticket for the enrollment, the first
    /// row in storage order wins.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;
}

/// Fixture implementation for tests and DB-less smoke runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketRepository;

#[async_trait]
impl TicketRepository for FixtureTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        _enrollment_id: i32,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        Ok(None)
    }
}
