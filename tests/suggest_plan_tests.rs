//! The plan-recommendation contract: validation short-circuits before any
//! upstream call, and the gateway's failure taxonomy passes through
//! untransformed.

mod common;

use std::sync::Arc;

use common::{Behavior, StubCompletion};
use furious_portal::SuggestPlanUseCase;

#[tokio::test]
async fn empty_requirements_are_rejected_without_an_upstream_call() {
    let completion = Arc::new(StubCompletion::echoing());
    let use_case = SuggestPlanUseCase::new(completion.clone());

    let err = use_case.execute("", "minecraft").await.unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "Invalid input: Missing requirements or planType");
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn missing_plan_type_is_rejected_without_an_upstream_call() {
    let completion = Arc::new(StubCompletion::echoing());
    let use_case = SuggestPlanUseCase::new(completion.clone());

    let err = use_case
        .execute("20 players, modded, 100+ mods", "")
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn unknown_plan_type_is_rejected_without_an_upstream_call() {
    let completion = Arc::new(StubCompletion::echoing());
    let use_case = SuggestPlanUseCase::new(completion.clone());

    let err = use_case
        .execute("need a mail server", "mail")
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(completion.calls(), 0);
}

#[tokio::test]
async fn valid_request_makes_exactly_one_upstream_call() {
    let completion = Arc::new(StubCompletion::echoing());
    let use_case = SuggestPlanUseCase::new(completion.clone());

    let recommendation = use_case
        .execute("20 players, modded, 100+ mods", "minecraft")
        .await
        .unwrap();

    assert!(!recommendation.is_empty());
    assert_eq!(completion.calls(), 1);
}

#[tokio::test]
async fn rate_limit_passes_through_verbatim() {
    let completion = Arc::new(StubCompletion::with_behavior(Behavior::RateLimited));
    let use_case = SuggestPlanUseCase::new(completion);

    let err = use_case
        .execute("a couple of moderation bots", "discord")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(
        err.to_string(),
        "Rate limit exceeded. Please try again later."
    );
}

#[tokio::test]
async fn payment_required_passes_through_verbatim() {
    let completion = Arc::new(StubCompletion::with_behavior(Behavior::PaymentRequired));
    let use_case = SuggestPlanUseCase::new(completion);

    let err = use_case
        .execute("a web app with 5000 daily visitors", "vps")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Payment required. Please add credits to your workspace."
    );
}

#[tokio::test]
async fn other_upstream_failures_stay_generic() {
    let completion = Arc::new(StubCompletion::with_behavior(Behavior::Upstream));
    let use_case = SuggestPlanUseCase::new(completion);

    let err = use_case
        .execute("small survival server", "minecraft")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Upstream error: Failed to get AI response");
}
