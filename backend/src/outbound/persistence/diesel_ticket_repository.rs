//! PostgreSQL-backed `TicketRepository` implementation using Diesel ORM.
//!
//! Loads the ticket and its type in one joined read because the eligibility
//! gate always evaluates both together.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{Ticket, TicketStatus, TicketType};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{TicketRow, TicketTypeRow};
use super::pool::{DbPool, PoolError};
use super::schema::{ticket_types, tickets};

/// Diesel-backed implementation of the ticket repository port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TicketRepositoryError {
    map_basic_pool_error(error, |message| TicketRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> TicketRepositoryError {
    map_basic_diesel_error(
        error,
        TicketRepositoryError::query,
        TicketRepositoryError::connection,
    )
}

/// Convert a joined ticket/type row pair into a validated domain ticket.
fn row_to_ticket(
    ticket: TicketRow,
    ticket_type: TicketTypeRow,
) -> Result<Ticket, TicketRepositoryError> {
    let status: TicketStatus = ticket
        .status
        .parse()
        .map_err(|err: crate::domain::ParseTicketStatusError| {
            TicketRepositoryError::query(err.to_string())
        })?;

    Ok(Ticket {
        id: ticket.id,
        enrollment_id: ticket.enrollment_id,
        status,
        ticket_type: TicketType {
            id: ticket_type.id,
            is_remote: ticket_type.is_remote,
            includes_hotel: ticket_type.includes_hotel,
        },
    })
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // First row in storage order wins when an enrollment somehow holds
        // more than one ticket.
        let row = tickets::table
            .inner_join(ticket_types::table)
            .filter(tickets::enrollment_id.eq(enrollment_id))
            .order(tickets::id.asc())
            .select((TicketRow::as_select(), TicketTypeRow::as_select()))
            .first::<(TicketRow, TicketTypeRow)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|(ticket, ticket_type)| row_to_ticket(ticket, ticket_type))
            .transpose()
    }
}
