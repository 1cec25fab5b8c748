//! WebSocket Connection Handler
//!
//! Forwards gateway events to one client until either side hangs up.
//! Inbound frames other than Close are ignored.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use super::gateway::Gateway;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let gateway = Arc::clone(&state.gateway);
    ws.on_upgrade(move |socket| handle_socket(socket, gateway))
}

async fn handle_socket(socket: WebSocket, gateway: Arc<Gateway>) {
    let session_id = Uuid::new_v4();
    let mut events = gateway.subscribe();
    let (mut sender, mut receiver) = socket.split();

    metrics::websocket_connected();
    tracing::debug!(%session_id, "WebSocket subscriber connected");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    let text = match serde_json::to_string(&event) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::error!(%session_id, "Failed to serialize event: {}", e);
                            continue;
                        }
                    };
                    if sender.send(WsMessage::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%session_id, skipped, "Subscriber lagged, events skipped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(WsMessage::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    metrics::websocket_disconnected();
    tracing::debug!(%session_id, "WebSocket subscriber disconnected");
}
