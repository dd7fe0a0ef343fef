use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handler::{
    admin_list_tickets, admin_list_users, chat_history, chat_relay, create_ticket, list_tickets,
    suggest_plan, update_ticket,
};
use super::Container;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// The portal's route table. CORS is wide open because the chat widget is
/// embedded on marketing pages served from arbitrary origins; the layer
/// answers `OPTIONS` pre-flights with an empty body.
pub fn build_router(container: Arc<Container>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/functions/suggest-plan", post(suggest_plan))
        .route("/functions/chat", post(chat_relay))
        .route("/chat/messages", get(chat_history))
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/{id}", patch(update_ticket))
        .route("/admin/tickets", get(admin_list_tickets))
        .route("/admin/users", get(admin_list_users))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
