use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::connector::api::{ApiError, Container};
use crate::domain::{DomainError, Identity};

/// Resolve the request's bearer token to an identity through the auth
/// provider. Handlers for authenticated surfaces call this first.
pub async fn require_identity(
    container: &Arc<Container>,
    headers: &HeaderMap,
) -> Result<Identity, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| DomainError::unauthorized("Missing bearer token"))?;

    Ok(container.auth().authenticate(token).await?)
}
