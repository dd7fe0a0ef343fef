use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to the external completion
/// gateway and receiving generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details, and translate the gateway's capacity responses (rate limit,
/// billing quota) into the matching [`DomainError`] variants so callers can
/// surface them verbatim. One call is one bounded HTTP round trip; no
/// implementor retries.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a `system` instruction followed by a `user` prompt and return the
    /// generated text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;
}
