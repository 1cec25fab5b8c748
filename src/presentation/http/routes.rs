//! Route Configuration

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::presentation::websocket::ws_handler;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(account_routes())
        .merge(message_routes())
        // Real-time notification feed
        .route("/ws", get(ws_handler))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::account::signup))
        .route("/login", post(handlers::account::login))
        .route("/resetPassword", patch(handlers::account::reset_password))
        .route("/getUser/{handle}", get(handlers::account::get_user))
        .route("/deleteUser/{handle}", delete(handlers::account::delete_user))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/addMessage", post(handlers::message::add_message))
        .route("/getMessages", get(handlers::message::get_messages))
}
