//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod account;
pub mod health;
pub mod message;
