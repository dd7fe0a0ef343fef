use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::{ApiError, Container};

#[derive(Debug, Deserialize)]
pub struct SuggestPlanRequest {
    #[serde(default)]
    pub requirements: String,
    /// Raw wire value; validated by the use case so an unknown category is a
    /// clean 400 instead of a deserialization failure.
    #[serde(rename = "planType", default)]
    pub plan_type: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestPlanResponse {
    pub recommendation: String,
}

/// `POST /functions/suggest-plan`
pub async fn suggest_plan(
    State(container): State<Arc<Container>>,
    Json(body): Json<SuggestPlanRequest>,
) -> Result<Json<SuggestPlanResponse>, ApiError> {
    let recommendation = container
        .suggest_plan_use_case()
        .execute(&body.requirements, &body.plan_type)
        .await?;

    Ok(Json(SuggestPlanResponse { recommendation }))
}
