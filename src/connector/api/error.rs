//! HTTP mapping for the error taxonomy.
//!
//! Every handler returns `Result<T, ApiError>`; the [`IntoResponse`] impl
//! turns a [`DomainError`] into a JSON `{ "error": … }` body with the right
//! status code. Capacity conditions keep their distinct codes (429, 402) so
//! callers can tell "slow down" from "pay"; internal failures were already
//! reduced to generic messages (and logged) where they occurred.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::DomainError;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidInput(m) => (StatusCode::BAD_REQUEST, m.clone()),
            DomainError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.clone()),
            DomainError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
            DomainError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            DomainError::RateLimited(m) => (StatusCode::TOO_MANY_REQUESTS, m.clone()),
            DomainError::PaymentRequired(m) => (StatusCode::PAYMENT_REQUIRED, m.clone()),
            DomainError::Configuration(m) => {
                error!(message = %m, "configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            }
            DomainError::Upstream(m) | DomainError::Storage(m) => {
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            }
            DomainError::IoError(e) => {
                error!(error = %e, "I/O error in request lifecycle");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            DomainError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
