use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::application::UserAccount;
use crate::connector::api::handler::require_identity;
use crate::connector::api::{ApiError, Container};
use crate::domain::Ticket;

/// `GET /admin/tickets`: every ticket, newest first.
pub async fn admin_list_tickets(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let tickets = container
        .admin_overview_use_case()
        .list_tickets(&identity)
        .await?;
    Ok(Json(tickets))
}

/// `GET /admin/users`: every profile joined with its role.
pub async fn admin_list_users(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserAccount>>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let users = container
        .admin_overview_use_case()
        .list_users(&identity)
        .await?;
    Ok(Json(users))
}
