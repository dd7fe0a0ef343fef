use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::application::{RoleRepository, TicketRepository};
use crate::domain::{DomainError, Identity, Ticket, TicketStatus};

/// What an admin wants changed on a ticket. Both fields optional; an update
/// with neither is rejected as empty.
#[derive(Debug, Default, Clone)]
pub struct TicketUpdate {
    pub status: Option<TicketStatus>,
    pub admin_notes: Option<String>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.admin_notes.is_none()
    }
}

/// Admin-gated mutation of ticket status and notes.
///
/// The acting principal's role is queried per request. This is the gating
/// convenience check; the managed store's row-level policy remains the actual
/// security boundary and will reject the write regardless.
pub struct UpdateTicketUseCase {
    tickets: Arc<dyn TicketRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl UpdateTicketUseCase {
    pub fn new(tickets: Arc<dyn TicketRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { tickets, roles }
    }

    pub async fn execute(
        &self,
        actor: &Identity,
        ticket_id: Uuid,
        update: TicketUpdate,
    ) -> Result<Ticket, DomainError> {
        if update.is_empty() {
            return Err(DomainError::invalid_input("Nothing to update"));
        }

        if !self.roles.is_admin(actor.user_id).await? {
            return Err(DomainError::forbidden(
                "Access denied. Admin privileges required.",
            ));
        }

        let mut ticket = self
            .tickets
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("ticket {ticket_id}")))?;

        if let Some(status) = update.status {
            ticket.apply_status(status);
        }
        if let Some(notes) = update.admin_notes {
            ticket.apply_admin_notes(notes);
        }

        let stored = self.tickets.update(&ticket).await?;
        info!(
            ticket_id = %stored.id(),
            status = stored.status().as_str(),
            "ticket updated"
        );
        Ok(stored)
    }
}
