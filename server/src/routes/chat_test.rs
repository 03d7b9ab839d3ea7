use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use protocol::widget::DEFAULT_ACCENT;
use tower::ServiceExt;

use super::*;
use crate::rate_limit::{RateLimitConfig, RateLimiter};
use crate::routes::api_routes;
use crate::services::store::{ClientRecord, MemoryStore};
use crate::state::test_helpers::{test_app_state, test_app_state_with_limiter};

fn post_chat(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn chat_replies_with_greeting() {
    let (state, _) = test_app_state();
    let app = api_routes(state);

    let (status, body) = send(&app, post_chat(serde_json::json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::OK);
    let reply: ChatReply = serde_json::from_str(&body).unwrap();
    assert_eq!(reply.reply, protocol::GREETING);
}

#[tokio::test]
async fn chat_reply_parses_with_client_classifier() {
    let (state, _) = test_app_state();
    let app = api_routes(state);

    let (_, body) = send(&app, post_chat(serde_json::json!({ "message": "where are you located?" }))).await;
    let reply = protocol::message::parse_reply_body(&body).unwrap();
    assert!(reply.contains("Main Street"), "{reply}");
}

#[tokio::test]
async fn chat_books_appointment_for_client() {
    let (state, store) = test_app_state();
    let app = api_routes(state);

    let (status, body) = send(
        &app,
        post_chat(serde_json::json!({
            "message": "book appointment: 2025-12-03 16:00, Alex, meeting",
            "client": "demo"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Appointment booked for Alex on 2025-12-03 at 16:00!"), "{body}");
    assert_eq!(store.appointments().await.len(), 1);
}

#[tokio::test]
async fn chat_without_message_field_gets_greeting() {
    let (state, _) = test_app_state();
    let app = api_routes(state);

    let (status, body) = send(&app, post_chat(serde_json::json!({ "client": "demo" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(protocol::GREETING));
}

#[tokio::test]
async fn chat_rejects_non_json_body() {
    let (state, _) = test_app_state();
    let app = api_routes(state);

    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert!(status.is_client_error(), "{status}");
}

fn limiter_with_per_client(limit: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: limit,
        per_client_window: Duration::from_secs(60),
        global_limit: 100,
        global_window: Duration::from_secs(60),
    })
}

async fn add_tenant(store: &MemoryStore, slug: &str) {
    store
        .add_client(ClientRecord {
            id: uuid::Uuid::new_v4(),
            slug: slug.to_owned(),
            name: slug.to_owned(),
            logo: None,
            color: DEFAULT_ACCENT.to_owned(),
            admin_email: None,
        })
        .await;
}

#[tokio::test]
async fn chat_rate_limits_per_client() {
    let (state, store) = test_app_state_with_limiter(limiter_with_per_client(2));
    add_tenant(&store, "acme").await;
    let app = api_routes(state);

    for _ in 0..2 {
        let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi", "client": "acme" }))).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi", "client": "acme" }))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    // The default tenant has its own window.
    let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_slugs_count_against_the_default_tenant() {
    let (state, store) = test_app_state_with_limiter(limiter_with_per_client(2));
    add_tenant(&store, "acme").await;
    let app = api_routes(state);

    let mut accepted = 0;
    for i in 0..10 {
        let body = serde_json::json!({
            "message": "book appointment: 2025-12-03 16:00, Alex, meeting",
            "client": format!("junk{i}"),
        });
        let (status, _) = send(&app, post_chat(body)).await;
        if status == StatusCode::OK {
            accepted += 1;
        } else {
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        }
    }
    assert_eq!(accepted, 2);
    assert_eq!(store.appointments().await.len(), 2);

    // The default tenant's window is spent; a real second tenant is not.
    let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi", "client": "demo" }))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi", "client": "acme" }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_default_client_maps_to_service_unavailable() {
    let (mut state, _) = test_app_state();
    state.default_client = "ghost".into();
    let app = api_routes(state);

    let (status, _) = send(&app, post_chat(serde_json::json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn reception_error_to_status_maps_store_errors() {
    let err = ReceptionError::Store(crate::services::store::StoreError::UnknownClient(uuid::Uuid::nil()));
    assert_eq!(reception_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}
