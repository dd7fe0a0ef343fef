use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::{
    MessageRepository, ProfileRepository, RoleRepository, TicketRepository,
};
use crate::domain::{
    ChatMessage, DomainError, NewChatMessage, Profile, Role, RoleGrant, Ticket,
};

/// In-memory stand-in for the managed store, implementing all four
/// repository traits. Serves tests and `--memory-store` operation; state dies
/// with the process.
pub struct InMemoryStore {
    messages: Mutex<Vec<(u64, ChatMessage)>>,
    tickets: Mutex<HashMap<Uuid, Ticket>>,
    grants: Mutex<Vec<RoleGrant>>,
    profiles: Mutex<Vec<Profile>>,
    // Insertion counter; breaks `created_at` ties so same-millisecond
    // messages keep arrival order, like the real store's row order.
    seq: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            tickets: Mutex::new(HashMap::new()),
            grants: Mutex::new(Vec::new()),
            profiles: Mutex::new(Vec::new()),
            seq: AtomicU64::new(0),
        }
    }

    /// Seed an admin grant (dev/test convenience; the real store manages
    /// grants out of band).
    pub async fn grant_admin(&self, user_id: Uuid) {
        self.grants.lock().await.push(RoleGrant::admin(user_id));
    }

    pub async fn add_profile(&self, profile: Profile) {
        self.profiles.lock().await.push(profile);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn append(&self, message: NewChatMessage) -> Result<ChatMessage, DomainError> {
        let stored = ChatMessage::new(message.user_id, message.role, message.content);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.messages.lock().await.push((seq, stored.clone()));
        debug!(message_id = %stored.id(), "message saved to memory");
        Ok(stored)
    }

    async fn history(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let store = self.messages.lock().await;
        let mut rows: Vec<(u64, ChatMessage)> = store
            .iter()
            .filter(|(_, m)| m.user_id() == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|(seq, m)| (m.created_at(), *seq));

        let mut messages: Vec<ChatMessage> = rows.into_iter().map(|(_, m)| m).collect();
        if let Some(limit) = limit {
            if messages.len() > limit {
                messages.drain(..messages.len() - limit);
            }
        }
        Ok(messages)
    }
}

#[async_trait]
impl TicketRepository for InMemoryStore {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        self.tickets
            .lock()
            .await
            .insert(ticket.id(), ticket.clone());
        Ok(ticket.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        Ok(self.tickets.lock().await.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError> {
        let store = self.tickets.lock().await;
        let mut tickets: Vec<Ticket> = store
            .values()
            .filter(|t| t.is_owned_by(user_id))
            .cloned()
            .collect();
        tickets.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(tickets)
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, DomainError> {
        let store = self.tickets.lock().await;
        let mut tickets: Vec<Ticket> = store.values().cloned().collect();
        tickets.sort_by_key(|t| std::cmp::Reverse(t.created_at()));
        Ok(tickets)
    }

    async fn update(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        let mut store = self.tickets.lock().await;
        if !store.contains_key(&ticket.id()) {
            return Err(DomainError::not_found(format!("ticket {}", ticket.id())));
        }
        store.insert(ticket.id(), ticket.clone());
        Ok(ticket.clone())
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn is_admin(&self, user_id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .grants
            .lock()
            .await
            .iter()
            .any(|g| g.user_id == user_id && g.role == Role::Admin))
    }

    async fn list_grants(&self) -> Result<Vec<RoleGrant>, DomainError> {
        Ok(self.grants.lock().await.clone())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        let mut profiles = self.profiles.lock().await.clone();
        profiles.sort_by_key(|p| std::cmp::Reverse(p.created_at));
        Ok(profiles)
    }
}
