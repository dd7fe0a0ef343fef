use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ChatMessage, DomainError, NewChatMessage};

/// Persistence for chat messages, delegated to the managed store.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message and return the stored row.
    async fn append(&self, message: NewChatMessage) -> Result<ChatMessage, DomainError>;

    /// A user's messages in ascending `created_at` order. `limit`, when set,
    /// bounds the result to the most recent window (still returned ascending).
    async fn history(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, DomainError>;
}
