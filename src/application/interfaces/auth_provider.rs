use async_trait::async_trait;

use crate::domain::{DomainError, Identity};

/// The external authentication provider, reduced to the one question this
/// service asks it: which stable identity does this bearer token belong to?
///
/// Credential verification, session issuance and refresh are entirely the
/// provider's business.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a bearer token to an identity, or [`DomainError::Unauthorized`]
    /// when the token is missing, expired, or unknown.
    async fn authenticate(&self, token: &str) -> Result<Identity, DomainError>;
}
