use async_trait::async_trait;

use crate::domain::{DomainError, Profile};

/// Read access to public account profiles, newest first.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError>;
}
