//! WebSocket Notifications
//!
//! Push feed of message events for connected clients.

pub mod gateway;
pub mod handler;

pub use gateway::{Gateway, GatewayEvent, MessageUpdateEvent};
pub use handler::ws_handler;
