//! Account API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{unique_handle, TestApp, TEST_ACCOUNT};

/// Test signup returns the safe projection
#[tokio::test]
async fn test_signup_returns_safe_account() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/signup",
            json!({ "handle": TEST_ACCOUNT.handle, "secret": TEST_ACCOUNT.secret }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["handle"], TEST_ACCOUNT.handle);
    assert!(body["id"].is_string());
    assert!(body["joinedAt"].is_string());
    assert!(body.get("secret").is_none());
    assert!(!body.to_string().contains(TEST_ACCOUNT.secret));
}

/// Test signup accepts the legacy username/password field names
#[tokio::test]
async fn test_signup_with_legacy_field_names() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/signup", json!({ "username": "legacy", "password": "pw" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["handle"], "legacy");
}

/// Test signup with missing fields fails validation
#[tokio::test]
async fn test_signup_with_missing_fields_fails() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/signup", json!({ "handle": "alice" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Secret is required" }));
}

/// Test malformed JSON still answers with an error body
#[tokio::test]
async fn test_signup_with_malformed_body_fails() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/signup")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

/// Test duplicate handle is a storage failure and keeps the first account
#[tokio::test]
async fn test_signup_with_duplicate_handle_fails() {
    let app = TestApp::new();
    let handle = unique_handle();
    let first = app.signup(&handle, "first").await;

    let (status, body) = app
        .post_json("/signup", json!({ "handle": handle, "secret": "second" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save user" }));

    let (status, fetched) = app.get(&format!("/getUser/{}", handle)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);
}

/// Test login with valid credentials
#[tokio::test]
async fn test_login_with_valid_credentials() {
    let app = TestApp::new();
    let created = app.signup(TEST_ACCOUNT.handle, TEST_ACCOUNT.secret).await;

    let (status, body) = app
        .post_json(
            "/login",
            json!({ "handle": TEST_ACCOUNT.handle, "secret": TEST_ACCOUNT.secret }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

/// Test wrong secret and unknown handle produce the same response
#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.signup(TEST_ACCOUNT.handle, TEST_ACCOUNT.secret).await;

    let wrong_secret = app
        .post_json(
            "/login",
            json!({ "handle": TEST_ACCOUNT.handle, "secret": "WrongSecret" }),
        )
        .await;
    let unknown_handle = app
        .post_json("/login", json!({ "handle": "nobody", "secret": TEST_ACCOUNT.secret }))
        .await;

    assert_eq!(wrong_secret.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_secret, unknown_handle);
    assert_eq!(wrong_secret.1, json!({ "error": "Invalid username or password" }));
}

/// Test login with empty secret fails validation
#[tokio::test]
async fn test_login_with_empty_secret_fails() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json("/login", json!({ "handle": "alice", "secret": "" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test secret reset switches which secret logs in
#[tokio::test]
async fn test_reset_password_changes_secret() {
    let app = TestApp::new();
    let handle = unique_handle();
    let created = app.signup(&handle, "old").await;

    let (status, body) = app
        .patch_json("/resetPassword", json!({ "handle": handle, "secret": "new" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, _) = app
        .post_json("/login", json!({ "handle": handle, "secret": "new" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post_json("/login", json!({ "handle": handle, "secret": "old" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Test secret reset for an unknown handle
#[tokio::test]
async fn test_reset_password_unknown_handle() {
    let app = TestApp::new();

    let (status, body) = app
        .patch_json("/resetPassword", json!({ "handle": "nobody", "secret": "new" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

/// Test secret reset without a secret
#[tokio::test]
async fn test_reset_password_without_secret_fails() {
    let app = TestApp::new();
    let handle = unique_handle();
    app.signup(&handle, "old").await;

    let (status, _) = app
        .patch_json("/resetPassword", json!({ "handle": handle }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test fetching an unknown handle
#[tokio::test]
async fn test_get_unknown_user() {
    let app = TestApp::new();

    let (status, body) = app.get("/getUser/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

/// Test delete then fetch
#[tokio::test]
async fn test_delete_user_then_get_fails() {
    let app = TestApp::new();
    let handle = unique_handle();
    let created = app.signup(&handle, "pw").await;

    let (status, body) = app.delete(&format!("/deleteUser/{}", handle)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, _) = app.get(&format!("/getUser/{}", handle)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/deleteUser/{}", handle)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
