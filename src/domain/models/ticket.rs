use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }
}

/// A support ticket. Created by its owner; status and admin notes are only
/// mutated by admin-role actors.
///
/// Status transitions are deliberately unconstrained (any status may follow
/// any other); the one invariant carried here is that `resolved_at` is set
/// exactly while the status is `resolved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    status: TicketStatus,
    priority: TicketPriority,
    admin_notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(
        user_id: Uuid,
        title: String,
        description: String,
        priority: TicketPriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            status: TicketStatus::Open,
            priority,
            admin_notes: None,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        }
    }

    /// Reconstitutes from persisted data (used by adapters).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: Uuid,
        user_id: Uuid,
        title: String,
        description: String,
        status: TicketStatus,
        priority: TicketPriority,
        admin_notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        resolved_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            status,
            priority,
            admin_notes,
            created_at,
            updated_at,
            resolved_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn priority(&self) -> TicketPriority {
        self.priority
    }

    pub fn admin_notes(&self) -> Option<&str> {
        self.admin_notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Apply a status write. `resolved_at` is stamped when the new status is
    /// `resolved` and cleared on any other value; `updated_at` is bumped.
    pub fn apply_status(&mut self, status: TicketStatus) {
        self.status = status;
        self.resolved_at = if status == TicketStatus::Resolved {
            Some(Utc::now())
        } else {
            None
        };
        self.updated_at = Utc::now();
    }

    /// Replace the admin notes; `updated_at` is bumped.
    pub fn apply_admin_notes(&mut self, notes: String) {
        self.admin_notes = Some(notes);
        self.updated_at = Utc::now();
    }
}
