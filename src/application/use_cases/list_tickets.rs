use std::sync::Arc;

use uuid::Uuid;

use crate::application::{MessageRepository, TicketRepository};
use crate::domain::{ChatMessage, DomainError, Ticket};

/// Read paths for the portal: a user's own tickets and their chat history.
pub struct ListTicketsUseCase {
    tickets: Arc<dyn TicketRepository>,
}

impl ListTicketsUseCase {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    /// The caller's tickets, newest first.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError> {
        self.tickets.list_for_user(user_id).await
    }
}

/// A user's chat history, ascending by creation time.
pub struct ChatHistoryUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl ChatHistoryUseCase {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    pub async fn execute(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        self.messages.history(user_id, limit).await
    }
}
