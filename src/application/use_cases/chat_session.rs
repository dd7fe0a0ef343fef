use std::sync::Arc;

use tracing::warn;

use crate::application::use_cases::ChatRelayUseCase;
use crate::application::MessageRepository;
use crate::domain::{ChatMessage, DomainError, Identity, NewChatMessage};

/// The floating widget loads this many recent messages.
pub const DEFAULT_HISTORY_WINDOW: usize = 50;

/// Where a session currently is in its send cycle. States other than `Idle`
/// and `Error` exist only between the steps of a single [`ChatSession::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    SendingUserMessage,
    AwaitingAiResponse,
    PersistingAiResponse,
    Error,
}

/// One completed turn: the user's message and its assistant reply, both
/// already persisted.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// A user's chat session: the authenticated identity, the conversation view,
/// and the three-step send cycle (persist user message, invoke the relay,
/// persist the reply).
///
/// Sends are serialized per session: `send` takes `&mut self`, the explicit
/// form of the UI's disabled-input lock. Two sessions for the same identity
/// on different clients are not coordinated and may interleave in the store.
///
/// There is no compensating rollback: once the user's message is persisted it
/// stays persisted even when the relay or the reply write fails. There is
/// also no cancellation path; dropping the future simply abandons the cycle.
pub struct ChatSession {
    identity: Identity,
    messages: Arc<dyn MessageRepository>,
    relay: Arc<ChatRelayUseCase>,
    view: Vec<ChatMessage>,
    state: SessionState,
}

impl ChatSession {
    /// Sessions can only be built for an authenticated identity; callers
    /// without one never get this far.
    pub fn new(
        identity: Identity,
        messages: Arc<dyn MessageRepository>,
        relay: Arc<ChatRelayUseCase>,
    ) -> Self {
        Self {
            identity,
            messages,
            relay,
            view: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The conversation as currently known to this session, ascending by
    /// creation time.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.view
    }

    /// Replace the view with the persisted history (ascending; bounded to the
    /// most recent window when `limit` is set).
    pub async fn load_history(&mut self, limit: Option<usize>) -> Result<(), DomainError> {
        self.view = self.messages.history(self.identity.user_id, limit).await?;
        Ok(())
    }

    /// Run one turn. The view is appended only after each successful
    /// persistence call, never optimistically before.
    pub async fn send(&mut self, input: &str) -> Result<ChatTurn, DomainError> {
        let text = input.trim();
        if text.is_empty() {
            // No side effects and no state change for empty input.
            return Err(DomainError::invalid_input("Message is required"));
        }

        self.state = SessionState::SendingUserMessage;
        let user_message = match self
            .messages
            .append(NewChatMessage::user(self.identity.user_id, text))
            .await
        {
            Ok(m) => m,
            Err(e) => {
                self.state = SessionState::Error;
                return Err(e);
            }
        };
        self.view.push(user_message.clone());

        self.state = SessionState::AwaitingAiResponse;
        let reply = match self.relay.execute(text).await {
            Ok(r) => r,
            Err(e) => {
                // The user message stays persisted; resubmission is the
                // user's call.
                warn!(error = %e, "relay failed after user message was persisted");
                self.state = SessionState::Error;
                return Err(e);
            }
        };

        self.state = SessionState::PersistingAiResponse;
        let assistant_message = match self
            .messages
            .append(NewChatMessage::assistant(self.identity.user_id, reply))
            .await
        {
            Ok(m) => m,
            Err(e) => {
                self.state = SessionState::Error;
                return Err(e);
            }
        };
        self.view.push(assistant_message.clone());

        self.state = SessionState::Idle;
        Ok(ChatTurn {
            user_message,
            assistant_message,
        })
    }
}
