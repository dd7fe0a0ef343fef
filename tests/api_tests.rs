//! The HTTP surface: status/body mapping for the failure taxonomy, CORS,
//! bearer auth, and the ticket routes, driven through the router in-process.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{Behavior, StubCompletion};
use furious_portal::{
    build_router, CompletionClient, Container, InMemoryStore, MessageRepository, NewChatMessage,
    Profile, StaticTokenAuth, UnconfiguredCompletion,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

const USER_TOKEN: &str = "user-token";
const ADMIN_TOKEN: &str = "admin-token";

struct TestApi {
    router: Router,
    store: Arc<InMemoryStore>,
    user_id: Uuid,
    admin_id: Uuid,
}

async fn setup_api(completion: Arc<dyn CompletionClient>) -> TestApi {
    let store = Arc::new(InMemoryStore::new());
    let user_id = Uuid::new_v4();
    let admin_id = Uuid::new_v4();
    store.grant_admin(admin_id).await;

    let auth = Arc::new(
        StaticTokenAuth::new()
            .with_token(USER_TOKEN, user_id)
            .with_token(ADMIN_TOKEN, admin_id),
    );

    let container = Arc::new(Container::with_parts(
        completion,
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        auth,
    ));

    TestApi {
        router: build_router(container),
        store,
        user_id,
        admin_id,
    }
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn preflight_is_answered_for_any_origin_with_no_body() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/functions/suggest-plan")
        .header(header::ORIGIN, "https://furioushosting.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = api.router.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn suggest_plan_rejects_missing_fields_with_400() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/suggest-plan",
        None,
        Some(serde_json::json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing requirements or planType");
}

#[tokio::test]
async fn suggest_plan_returns_only_a_recommendation_on_success() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/suggest-plan",
        None,
        Some(serde_json::json!({
            "requirements": "20 players, modded, 100+ mods",
            "planType": "minecraft"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["recommendation"].as_str().unwrap().starts_with("reply to"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn suggest_plan_surfaces_rate_limit_verbatim() {
    let api = setup_api(Arc::new(StubCompletion::with_behavior(Behavior::RateLimited))).await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/suggest-plan",
        None,
        Some(serde_json::json!({ "requirements": "r", "planType": "vps" })),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Rate limit exceeded. Please try again later.");
}

#[tokio::test]
async fn suggest_plan_surfaces_billing_verbatim() {
    let api = setup_api(Arc::new(StubCompletion::with_behavior(
        Behavior::PaymentRequired,
    )))
    .await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/suggest-plan",
        None,
        Some(serde_json::json!({ "requirements": "r", "planType": "discord" })),
    )
    .await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(
        body["error"],
        "Payment required. Please add credits to your workspace."
    );
}

#[tokio::test]
async fn missing_gateway_credential_is_a_500() {
    let api = setup_api(Arc::new(UnconfiguredCompletion)).await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/suggest-plan",
        None,
        Some(serde_json::json!({ "requirements": "r", "planType": "minecraft" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI_GATEWAY_API_KEY is not configured");
}

#[tokio::test]
async fn chat_requires_a_bearer_token() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let (status, _) = send(
        &api.router,
        Method::POST,
        "/functions/chat",
        None,
        Some(serde_json::json!({ "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &api.router,
        Method::POST,
        "/functions/chat",
        Some("forged"),
        Some(serde_json::json!({ "message": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chat_relays_a_message_for_an_authenticated_user() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/chat",
        Some(USER_TOKEN),
        Some(serde_json::json!({ "message": "do you support modpacks?" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "reply to do you support modpacks?");

    let (status, body) = send(
        &api.router,
        Method::POST,
        "/functions/chat",
        Some(USER_TOKEN),
        Some(serde_json::json!({ "message": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn chat_history_returns_the_callers_messages_ascending() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    api.store
        .append(NewChatMessage::user(api.user_id, "A"))
        .await
        .unwrap();
    api.store
        .append(NewChatMessage::assistant(api.user_id, "reply to A"))
        .await
        .unwrap();
    // Another user's messages must not leak into the caller's history.
    api.store
        .append(NewChatMessage::user(api.admin_id, "unrelated"))
        .await
        .unwrap();

    let (status, body) = send(
        &api.router,
        Method::GET,
        "/chat/messages",
        Some(USER_TOKEN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let contents: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, ["A", "reply to A"]);
}

#[tokio::test]
async fn ticket_flow_over_http_enforces_the_admin_gate() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;

    let (status, created) = send(
        &api.router,
        Method::POST,
        "/tickets",
        Some(USER_TOKEN),
        Some(serde_json::json!({
            "title": "Server lag",
            "description": "TPS drops below 10 in the evening",
            "priority": "high"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "open");
    let ticket_id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&api.router, Method::GET, "/tickets", Some(USER_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // The owner is not an admin, mutation is rejected.
    let (status, body) = send(
        &api.router,
        Method::PATCH,
        &format!("/tickets/{ticket_id}"),
        Some(USER_TOKEN),
        Some(serde_json::json!({ "status": "closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied. Admin privileges required.");

    let (status, resolved) = send(
        &api.router,
        Method::PATCH,
        &format!("/tickets/{ticket_id}"),
        Some(ADMIN_TOKEN),
        Some(serde_json::json!({ "status": "resolved", "admin_notes": "restarted the node" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved["status"], "resolved");
    assert!(!resolved["resolved_at"].is_null());
    assert_eq!(resolved["admin_notes"], "restarted the node");

    // Clearing the resolved status clears the timestamp.
    let (_, closed) = send(
        &api.router,
        Method::PATCH,
        &format!("/tickets/{ticket_id}"),
        Some(ADMIN_TOKEN),
        Some(serde_json::json!({ "status": "closed" })),
    )
    .await;
    assert!(closed["resolved_at"].is_null());
}

#[tokio::test]
async fn admin_routes_are_gated_and_join_roles() {
    let api = setup_api(Arc::new(StubCompletion::echoing())).await;
    api.store
        .add_profile(Profile::new(api.user_id, Some("Steve".to_string())))
        .await;

    let (status, _) = send(
        &api.router,
        Method::GET,
        "/admin/tickets",
        Some(USER_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &api.router,
        Method::GET,
        "/admin/users",
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Steve");
    assert_eq!(users[0]["role"], "user");
}
