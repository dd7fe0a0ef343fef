use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::handler::require_identity;
use crate::connector::api::{ApiError, Container};
use crate::domain::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /functions/chat`: the relay. Persistence of both sides of the turn
/// is the calling client's responsibility.
pub async fn chat_relay(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    require_identity(&container, &headers).await?;

    let response = container.chat_relay_use_case().execute(&body.message).await?;
    Ok(Json(ChatResponse { response }))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// `GET /chat/messages`: the caller's history, ascending.
pub async fn chat_history(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let messages = container
        .chat_history_use_case()
        .execute(identity.user_id, params.limit)
        .await?;
    Ok(Json(messages))
}
