use std::sync::Arc;

use tracing::info;

use crate::application::TicketRepository;
use crate::domain::{DomainError, Identity, Ticket, TicketPriority};

/// Creates an `open` ticket owned by the calling user. Any authenticated
/// user may create tickets for themselves.
pub struct CreateTicketUseCase {
    tickets: Arc<dyn TicketRepository>,
}

impl CreateTicketUseCase {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        title: &str,
        description: &str,
        priority: Option<TicketPriority>,
    ) -> Result<Ticket, DomainError> {
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "Title and description are required",
            ));
        }

        let ticket = Ticket::new(
            identity.user_id,
            title.trim().to_string(),
            description.trim().to_string(),
            priority.unwrap_or_default(),
        );

        let stored = self.tickets.insert(&ticket).await?;
        info!(ticket_id = %stored.id(), "ticket created");
        Ok(stored)
    }
}
