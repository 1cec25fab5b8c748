//! Message Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::AddMessageRequest;
use crate::domain::Message;
use crate::presentation::http::JsonBody;
use crate::presentation::websocket::GatewayEvent;
use crate::shared::error::Failure;
use crate::startup::AppState;

/// POST /addMessage
///
/// Saves the message, then notifies WebSocket subscribers with the stored
/// record.
pub async fn add_message(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AddMessageRequest>,
) -> Result<(StatusCode, Json<Message>), Failure> {
    let message = state.messages.save_message(body.into()).await?;

    let delivered = state.gateway.publish(GatewayEvent::message_update(message.clone()));
    tracing::debug!(message_id = %message.id, delivered, "Published messageUpdate");

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /getMessages
pub async fn get_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.messages.list_messages().await)
}
