use std::sync::Arc;

use tracing::info;

use crate::application::CompletionClient;
use crate::domain::{plan_catalog, DomainError, PlanCategory};

/// Recommends a hosting plan for free-text requirements.
///
/// A single-shot proxy: validate, slice the static catalog, compose the
/// instructional preamble, make exactly one completion call. No retries, no
/// caching, no rate limiting of its own; capacity errors from the gateway
/// pass through untransformed.
pub struct SuggestPlanUseCase {
    completion: Arc<dyn CompletionClient>,
}

impl SuggestPlanUseCase {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// `plan_type` is the raw wire value; unknown categories are rejected
    /// before any upstream call is made.
    pub async fn execute(
        &self,
        requirements: &str,
        plan_type: &str,
    ) -> Result<String, DomainError> {
        if requirements.trim().is_empty() || plan_type.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "Missing requirements or planType",
            ));
        }

        let category = PlanCategory::parse(plan_type)?;

        info!(plan_type = category.as_str(), "generating plan recommendation");

        let preamble = build_preamble(category)?;
        self.completion.complete(&preamble, requirements).await
    }
}

/// The fixed instruction preamble with the category's catalog embedded as
/// pretty-printed JSON.
fn build_preamble(category: PlanCategory) -> Result<String, DomainError> {
    let plans = serde_json::to_string_pretty(plan_catalog(category))
        .map_err(|e| DomainError::internal(format!("failed to encode plan catalog: {e}")))?;

    Ok(format!(
        "You are a hosting expert helping customers choose the right {} hosting plan. \n\
Based on the customer's requirements, analyze their needs and recommend the most suitable plan from the available options.\n\
\n\
Available plans:\n\
{}\n\
\n\
Provide a clear, concise recommendation that:\n\
1. Identifies the best matching plan by name\n\
2. Explains why this plan fits their needs\n\
3. Mentions key specs that align with their requirements\n\
4. Suggests if they might need to upgrade in the future based on growth potential\n\
\n\
Keep the response friendly, professional, and under 200 words.",
        category.as_str(),
        plans
    ))
}
