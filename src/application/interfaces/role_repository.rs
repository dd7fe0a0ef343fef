use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, RoleGrant};

/// Read access to capability grants. Queried per request; no caching, so a
/// revoked grant takes effect on the next call.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Whether an `admin` grant exists for this user.
    async fn is_admin(&self, user_id: Uuid) -> Result<bool, DomainError>;

    /// All grants (admin dashboard).
    async fn list_grants(&self) -> Result<Vec<RoleGrant>, DomainError>;
}
