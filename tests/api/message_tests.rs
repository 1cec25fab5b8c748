//! Message API Tests

use std::time::Duration;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

use chat_backend::presentation::websocket::GatewayEvent;

use crate::common::TestApp;

/// Test adding a message returns 201 with the stored record
#[tokio::test]
async fn test_add_message_returns_created() {
    let app = TestApp::new();
    let before = Utc::now();

    let (status, body) = app
        .post_json(
            "/addMessage",
            json!({ "messageToAdd": { "body": "hello", "sender": "alice" } }),
        )
        .await;
    let after = Utc::now();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["body"], "hello");
    assert_eq!(body["sender"], "alice");
    assert!(body["id"].is_string());

    let sent_at: DateTime<Utc> = body["sentAt"].as_str().unwrap().parse().unwrap();
    assert!(sent_at >= before && sent_at <= after);
}

/// Test empty body or sender is rejected
#[tokio::test]
async fn test_add_message_requires_body_and_sender() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/addMessage",
            json!({ "messageToAdd": { "body": "", "sender": "alice" } }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Message content is required" }));

    let (status, body) = app
        .post_json(
            "/addMessage",
            json!({ "messageToAdd": { "body": "hello" } }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Message sender is required" }));

    let (_, messages) = app.get("/getMessages").await;
    assert_eq!(messages, json!([]));
}

/// Test messages come back ordered by sentAt regardless of insertion order
#[tokio::test]
async fn test_get_messages_ordered_by_sent_at() {
    let app = TestApp::new();

    for (body, sent_at) in [
        ("third", "2024-05-01T10:00:03Z"),
        ("first", "2024-05-01T10:00:01Z"),
        ("second", "2024-05-01T10:00:02Z"),
    ] {
        let (status, _) = app
            .post_json(
                "/addMessage",
                json!({ "messageToAdd": { "msg": body, "msgFrom": "alice", "msgDateTime": sent_at } }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, messages) = app.get("/getMessages").await;
    assert_eq!(status, StatusCode::OK);

    let bodies: Vec<&str> = messages
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);

    let (_, again) = app.get("/getMessages").await;
    assert_eq!(messages, again);
}

/// Test an empty store lists nothing
#[tokio::test]
async fn test_get_messages_empty() {
    let app = TestApp::new();

    let (status, body) = app.get("/getMessages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Test a saved message is pushed to gateway subscribers
#[tokio::test]
async fn test_add_message_notifies_subscribers() {
    let app = TestApp::new();
    let mut events = app.state.gateway.subscribe();

    let (status, saved) = app
        .post_json(
            "/addMessage",
            json!({ "messageToAdd": { "body": "ping", "sender": "bob" } }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("event should arrive")
        .unwrap();

    let GatewayEvent::MessageUpdate(update) = event;
    assert_eq!(serde_json::to_value(&update.msg).unwrap(), saved);
}

/// Test a rejected message is not pushed
#[tokio::test]
async fn test_rejected_message_is_not_published() {
    let app = TestApp::new();
    let mut events = app.state.gateway.subscribe();

    let (status, _) = app
        .post_json("/addMessage", json!({ "messageToAdd": { "sender": "bob" } }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(events.try_recv().is_err());
}
