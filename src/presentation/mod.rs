//! Presentation Layer
//!
//! The dispatch shim: HTTP routes, middleware and the WebSocket feed that
//! pushes message notifications.

pub mod http;
pub mod middleware;
pub mod websocket;
