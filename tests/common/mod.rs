//! Common Test Utilities
//!
//! Drives the real router in-process over an in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use chat_backend::config::Settings;
use chat_backend::startup::{build_router, AppState};

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Fresh application with empty in-memory repositories
    pub fn new() -> Self {
        let settings = Settings::defaults_only().expect("default settings should load");
        let state = AppState::in_memory(settings);
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Send a request and decode the JSON response body (Null when empty)
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Sign up and return the response body
    pub async fn signup(&self, handle: &str, secret: &str) -> Value {
        let (status, body) = self
            .post_json("/signup", serde_json::json!({ "handle": handle, "secret": secret }))
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", body);
        body
    }
}

/// Test account credentials
pub struct TestAccount {
    pub handle: &'static str,
    pub secret: &'static str,
}

pub const TEST_ACCOUNT: TestAccount = TestAccount {
    handle: "testuser",
    secret: "TestSecret123!",
};

/// Generate a unique test handle
pub fn unique_handle() -> String {
    format!("user_{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
}
