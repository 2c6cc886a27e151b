mod common;

use std::sync::Arc;

use api::config::ProxyConfig;
use api::gateway::GoogleTranslate;
use api::mailer::ResendMailer;
use api::routes::{self, ProxyState};
use api::wire::ErrorBody;
use axum::body::{to_bytes, Bytes};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::MockUpstream;

const FORM: &str = r#"{"name":"Ada","email":"ada@example.com","message":"Hello there"}"#;

fn state_for(config: &ProxyConfig) -> ProxyState {
    ProxyState::new(
        Arc::new(GoogleTranslate::new(config).unwrap()),
        Arc::new(ResendMailer::new(config).unwrap()),
    )
}

fn resend_config(upstream: &MockUpstream) -> ProxyConfig {
    ProxyConfig {
        resend_api_key: Some("re_test".into()),
        resend_url: format!("{}/emails", upstream.url),
        contact_to: Some("owner@example.com".into()),
        ..ProxyConfig::default()
    }
}

async fn call(state: ProxyState, body: &str) -> Response {
    routes::contact_send(State(state), Bytes::from(body.to_string()))
        .await
        .into_response()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn relays_message_and_mirrors_provider_reply() {
    let upstream = MockUpstream::start(|_| (200, r#"{"id":"email_123"}"#.to_string()));
    let response = call(state_for(&resend_config(&upstream)), FORM).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({"id": "email_123"}));

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "/emails");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer re_test"));

    let sent: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent["to"], serde_json::json!(["owner@example.com"]));
    assert_eq!(sent["reply_to"], "ada@example.com");
    assert_eq!(sent["subject"], "New Contact Form Submission from Ada");
}

#[tokio::test]
async fn incomplete_form_answers_400_without_calling_provider() {
    let upstream = MockUpstream::start(|_| (200, "{}".to_string()));
    let response = call(
        state_for(&resend_config(&upstream)),
        r#"{"name":"Ada","email":"","message":"Hi"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(body.error, "Missing email");
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn missing_credentials_answer_503() {
    let response = call(state_for(&ProxyConfig::default()), FORM).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(body.error, "Contact relay not configured");
}

#[tokio::test]
async fn provider_rejection_answers_500() {
    let upstream = MockUpstream::start(|_| {
        (422, r#"{"name":"validation_error","message":"bad from"}"#.to_string())
    });
    let response = call(state_for(&resend_config(&upstream)), FORM).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(body.error, "Failed to send message");
}
