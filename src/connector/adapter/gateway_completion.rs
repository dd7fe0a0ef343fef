use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::CompletionClient;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Returned instead of an error when the gateway answers successfully but the
/// response lacks the generated text.
const FALLBACK_COMPLETION: &str = "Unable to generate recommendation";

/// Literal capacity messages surfaced verbatim to callers.
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
const PAYMENT_MESSAGE: &str = "Payment required. Please add credits to your workspace.";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the gateway's chat-completions response we care about.
/// Every level is optional so a structurally odd success degrades to the
/// fallback text instead of a parse failure.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Option<Vec<ApiChoice>>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: Option<ApiChoiceMessage>,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    fn into_content(self) -> Option<String> {
        self.choices?
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|c| !c.is_empty())
    }
}

/// HTTP client for the external OpenAI-compatible completion gateway.
///
/// Implements [`CompletionClient`] so the use cases stay decoupled from
/// transport and vendor details. One call is one bounded round trip; the
/// client never retries. Capacity responses map to their dedicated error
/// variants with the portal's literal messages:
///
/// - 429 → [`DomainError::RateLimited`]
/// - 402 → [`DomainError::PaymentRequired`]
///
/// Any other failure (other non-success statuses, transport errors,
/// undecodable bodies) is logged with full detail and collapsed to a generic
/// [`DomainError::Upstream`] so gateway internals never leak to callers.
pub struct GatewayCompletionClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl GatewayCompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    /// - `AI_GATEWAY_API_KEY`  — required; returns `None` when absent
    /// - `AI_GATEWAY_BASE_URL` — optional; defaults to the hosted gateway
    /// - `AI_GATEWAY_MODEL`    — optional
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("AI_GATEWAY_API_KEY").ok()?;
        let base =
            std::env::var("AI_GATEWAY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(key, model, base))
    }
}

#[async_trait]
impl CompletionClient for GatewayCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("gateway request failed: {e}");
                DomainError::upstream("Failed to get AI response")
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(DomainError::rate_limited(RATE_LIMIT_MESSAGE));
            }
            if status == reqwest::StatusCode::PAYMENT_REQUIRED {
                return Err(DomainError::payment_required(PAYMENT_MESSAGE));
            }
            let body = response.text().await.unwrap_or_default();
            warn!("gateway returned {status}: {body}");
            return Err(DomainError::upstream("Failed to get AI response"));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            warn!("failed to decode gateway response: {e}");
            DomainError::upstream("Failed to get AI response")
        })?;

        Ok(api_response.into_content().unwrap_or_else(|| {
            warn!("gateway response carried no content, using fallback text");
            FALLBACK_COMPLETION.to_string()
        }))
    }
}

/// Stand-in wired when no gateway credential is configured: the server still
/// boots, and every completion-backed request fails with a configuration
/// error (a 500 at the API surface).
pub struct UnconfiguredCompletion;

#[async_trait]
impl CompletionClient for UnconfiguredCompletion {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, DomainError> {
        Err(DomainError::configuration(
            "AI_GATEWAY_API_KEY is not configured",
        ))
    }
}
