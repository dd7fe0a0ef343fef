//! Shared stubs for the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use furious_portal::{
    ChatMessage, CompletionClient, DomainError, InMemoryStore, MessageRepository, MessageRole,
    NewChatMessage,
};

pub enum Behavior {
    /// Reply with `"reply to {user}"` so each turn's answer is traceable.
    Echo,
    RateLimited,
    PaymentRequired,
    Upstream,
}

/// Scripted completion gateway that counts how often it is called.
pub struct StubCompletion {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StubCompletion {
    pub fn echoing() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Echo => Ok(format!("reply to {user}")),
            Behavior::RateLimited => Err(DomainError::rate_limited(
                "Rate limit exceeded. Please try again later.",
            )),
            Behavior::PaymentRequired => Err(DomainError::payment_required(
                "Payment required. Please add credits to your workspace.",
            )),
            Behavior::Upstream => Err(DomainError::upstream("Failed to get AI response")),
        }
    }
}

/// Message store that fails inserts for one role, for exercising the chat
/// session's error transitions.
pub struct FailingInserts {
    inner: InMemoryStore,
    fail_role: MessageRole,
}

impl FailingInserts {
    pub fn for_role(fail_role: MessageRole) -> Self {
        Self {
            inner: InMemoryStore::new(),
            fail_role,
        }
    }
}

#[async_trait]
impl MessageRepository for FailingInserts {
    async fn append(&self, message: NewChatMessage) -> Result<ChatMessage, DomainError> {
        if message.role == self.fail_role {
            return Err(DomainError::storage("store request failed"));
        }
        self.inner.append(message).await
    }

    async fn history(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        self.inner.history(user_id, limit).await
    }
}
