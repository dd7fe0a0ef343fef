use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::application::AuthProvider;
use crate::domain::{DomainError, Identity};

const USER_PATH: &str = "/auth/v1/user";

#[derive(Deserialize)]
struct AuthUser {
    id: Uuid,
}

/// Validates bearer tokens against the managed authentication service. The
/// provider owns credential verification entirely; this adapter just asks it
/// which identity a token belongs to.
pub struct RestAuth {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl RestAuth {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            url: format!("{}{}", base.trim_end_matches('/'), USER_PATH),
            api_key: api_key.into(),
        }
    }

    /// Construct from `AUTH_URL` (falling back to `STORE_URL`; the managed
    /// platform serves both from one host) and `STORE_SERVICE_KEY`.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("AUTH_URL")
            .or_else(|_| std::env::var("STORE_URL"))
            .ok()?;
        let key = std::env::var("STORE_SERVICE_KEY").ok()?;
        Some(Self::new(url, key))
    }
}

#[async_trait]
impl AuthProvider for RestAuth {
    async fn authenticate(&self, token: &str) -> Result<Identity, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!("auth provider unreachable: {e}");
                DomainError::upstream("authentication service unavailable")
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DomainError::unauthorized("Invalid or expired session"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("auth provider returned {status}: {body}");
            return Err(DomainError::upstream("authentication service unavailable"));
        }

        let user: AuthUser = response.json().await.map_err(|e| {
            warn!("failed to decode auth response: {e}");
            DomainError::upstream("authentication service unavailable")
        })?;

        Ok(Identity::new(user.id))
    }
}
