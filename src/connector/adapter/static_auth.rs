use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::AuthProvider;
use crate::domain::{DomainError, Identity};

/// Fixed token→identity map for tests and `--memory-store` runs, where no
/// real authentication service is in the loop.
#[derive(Default)]
pub struct StaticTokenAuth {
    tokens: HashMap<String, Uuid>,
}

impl StaticTokenAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, user_id: Uuid) -> Self {
        self.tokens.insert(token.into(), user_id);
        self
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuth {
    async fn authenticate(&self, token: &str) -> Result<Identity, DomainError> {
        self.tokens
            .get(token)
            .map(|id| Identity::new(*id))
            .ok_or_else(|| DomainError::unauthorized("Invalid or expired session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_unknown_is_rejected() {
        let user = Uuid::new_v4();
        let auth = StaticTokenAuth::new().with_token("secret", user);

        let identity = auth.authenticate("secret").await.unwrap();
        assert_eq!(identity.user_id, user);

        let err = auth.authenticate("wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
