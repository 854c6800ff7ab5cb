//! Enrollment and ticket data model.
//!
//! These types describe the registration side of the platform as far as the
//! hotel gate needs to see it: who is enrolled, which ticket they hold, and
//! what that ticket's type permits. All of it is read-only here; records are
//! created by the registration and payment flows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of an authenticated platform user.
///
/// The authentication layer resolves sessions to this id; the domain never
/// sees credentials or tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw database user id.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw id value.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's event registration record.
///
/// Storage carries contact and address columns alongside these fields; the
/// hotel gate only needs the identity and the owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Primary key of the enrollment record.
    pub id: i32,
    /// Owning user.
    pub user_id: UserId,
}

/// Lifecycle status of a purchased ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Reserved but not yet paid for.
    Reserved,
    /// Payment confirmed.
    Paid,
    /// Cancelled after reservation or payment.
    Cancelled,
}

/// Error returned when a stored status string is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {value}")]
pub struct ParseTicketStatusError {
    /// The unrecognised stored value.
    pub value: String,
}

impl TicketStatus {
    /// Canonical storage representation of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = ParseTicketStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ParseTicketStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry defining what a ticket admits its holder to.
///
/// The two flags are fixed at catalog-configuration time and drive the
/// eligibility predicate: only in-person types that include hotel
/// accommodation unlock the hotel endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketType {
    /// Primary key of the ticket type.
    pub id: i32,
    /// Whether the event is attended remotely.
    pub is_remote: bool,
    /// Whether the package includes hotel accommodation.
    pub includes_hotel: bool,
}

/// A purchased admission record tied to an enrollment.
///
/// The ticket type is embedded because the gate always evaluates both
/// together; repositories load them in one joined read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Primary key of the ticket record.
    pub id: i32,
    /// Enrollment this ticket belongs to.
    pub enrollment_id: i32,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// The purchased ticket type.
    pub ticket_type: TicketType,
}

impl Ticket {
    /// Whether this ticket unlocks hotel browsing.
    ///
    /// Reserved tickets, remote types, and types without hotel accommodation
    /// all fail the predicate.
    pub const fn grants_hotel_access(&self) -> bool {
        !matches!(self.status, TicketStatus::Reserved)
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("RESERVED", TicketStatus::Reserved)]
    #[case("PAID", TicketStatus::Paid)]
    #[case("CANCELLED", TicketStatus::Cancelled)]
    fn status_parses_stored_values(#[case] raw: &str, #[case] expected: TicketStatus) {
        assert_eq!(raw.parse::<TicketStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = "EXPIRED"
            .parse::<TicketStatus>()
            .expect_err("unknown status should fail");
        assert_eq!(err.value, "EXPIRED");
    }

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: 1,
            enrollment_id: 1,
            status,
            ticket_type: TicketType {
                id: 1,
                is_remote,
                includes_hotel,
            },
        }
    }

    #[rstest]
    #[case(TicketStatus::Paid, false, true, true)]
    #[case(TicketStatus::Cancelled, false, true, true)]
    #[case(TicketStatus::Reserved, false, true, false)]
    #[case(TicketStatus::Paid, true, true, false)]
    #[case(TicketStatus::Paid, true, false, false)]
    #[case(TicketStatus::Paid, false, false, false)]
    fn hotel_access_predicate(
        #[case] status: TicketStatus,
        #[case] is_remote: bool,
        #[case] includes_hotel: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(
            ticket(status, is_remote, includes_hotel).grants_hotel_access(),
            expected
        );
    }
}
