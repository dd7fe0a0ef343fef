use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::application::TicketUpdate;
use crate::connector::api::handler::require_identity;
use crate::connector::api::{ApiError, Container};
use crate::domain::{Ticket, TicketPriority, TicketStatus};

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Option<TicketPriority>,
}

/// `POST /tickets`
pub async fn create_ticket(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
    Json(body): Json<CreateTicketRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let ticket = container
        .create_ticket_use_case()
        .execute(&identity, &body.title, &body.description, body.priority)
        .await?;
    Ok(Json(ticket))
}

/// `GET /tickets`: the caller's tickets, newest first.
pub async fn list_tickets(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let tickets = container
        .list_tickets_use_case()
        .execute(identity.user_id)
        .await?;
    Ok(Json(tickets))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTicketRequest {
    pub status: Option<TicketStatus>,
    pub admin_notes: Option<String>,
}

/// `PATCH /tickets/{id}`: admin only.
pub async fn update_ticket(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
    Path(ticket_id): Path<Uuid>,
    Json(body): Json<UpdateTicketRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let identity = require_identity(&container, &headers).await?;

    let ticket = container
        .update_ticket_use_case()
        .execute(
            &identity,
            ticket_id,
            TicketUpdate {
                status: body.status,
                admin_notes: body.admin_notes,
            },
        )
        .await?;
    Ok(Json(ticket))
}
