//! Read-side port for enrollment lookup.
//!
//! The eligibility gate needs exactly one question answered here: does this
//! user have an enrollment, and if so which one. Persistence details stay
//! behind the hexagonal boundary.

use async_trait::async_trait;

use crate::domain::{Enrollment, UserId};

/// Errors raised when reading enrollments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentRepositoryError {
    /// Repository connection could not be established.
    #[error("enrollment read connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query failed during execution or row conversion.
    #[error("enrollment read query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl EnrollmentRepositoryError {
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

/// Port for looking up a user's enrollment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Return the enrollment owned by `user_id`, if any.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError>;
}

/// Fixture implementation for tests and DB-less smoke runs.
///
/// Behaves like an empty registration table: every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentRepository;

#[async_trait]
impl EnrollmentRepository for FixtureEnrollmentRepository {
    async fn find_by_user_id(
        &self,
        _user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        Ok(None)
    }
}
