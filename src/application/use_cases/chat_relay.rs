use std::sync::Arc;

use tracing::info;

use crate::application::CompletionClient;
use crate::domain::DomainError;

/// System instruction for the portal's support assistant.
const SUPPORT_PROMPT: &str = "\
You are Furious AI, the support assistant for Furious Hosting. We sell \
Minecraft server hosting, Discord bot hosting, and VPS plans. Answer \
questions about our hosting services, help customers troubleshoot their \
servers, and point them to a support ticket when a problem needs a human. \
Keep answers friendly, accurate, and short.";

/// The backing handler for the chat endpoint: one message in, one generated
/// reply out. Persistence of both sides of the turn is the caller's job (see
/// [`super::ChatSession`]); the relay holds no state between calls.
pub struct ChatRelayUseCase {
    completion: Arc<dyn CompletionClient>,
}

impl ChatRelayUseCase {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    pub async fn execute(&self, message: &str) -> Result<String, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::invalid_input("Message is required"));
        }

        info!(chars = message.len(), "relaying chat message");
        self.completion.complete(SUPPORT_PROMPT, message).await
    }
}
