use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Ticket};

/// Persistence for support tickets, delegated to the managed store.
///
/// The store enforces its own row-level policy; adapters surface a policy
/// rejection as [`DomainError::Forbidden`].
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError>;

    /// A user's own tickets, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError>;

    /// Every ticket, newest first (admin dashboard).
    async fn list_all(&self) -> Result<Vec<Ticket>, DomainError>;

    /// Persist a mutated ticket (status, notes, timestamps).
    async fn update(&self, ticket: &Ticket) -> Result<Ticket, DomainError>;
}
