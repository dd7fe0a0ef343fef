use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of a chat turn a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single persisted chat message. Immutable once written; conversations are
/// displayed in ascending `created_at` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    id: Uuid,
    user_id: Uuid,
    role: MessageRole,
    content: String,
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(user_id: Uuid, role: MessageRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    pub fn reconstitute(
        id: Uuid,
        user_id: Uuid,
        role: MessageRole,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            role,
            content,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_from_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Payload for inserting a new message; the store assigns id and timestamp
/// when it is the system of record.
#[derive(Debug, Clone, Serialize)]
pub struct NewChatMessage {
    pub user_id: Uuid,
    pub role: MessageRole,
    pub content: String,
}

impl NewChatMessage {
    pub fn user(user_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            user_id,
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(user_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            user_id,
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let user_id = Uuid::new_v4();
        let message = ChatMessage::new(user_id, MessageRole::User, "hello".to_string());

        assert_eq!(message.user_id(), user_id);
        assert_eq!(message.content(), "hello");
        assert!(message.is_from_user());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(MessageRole::User.as_str(), "user");
    }
}
