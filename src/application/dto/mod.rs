//! Data Transfer Objects
//!
//! DTOs for API request deserialization. Responses serialize the domain
//! `SafeAccount` and `Message` types directly.

pub mod request;

pub use request::{AddMessageRequest, CredentialsRequest, NewMessageBody, ResetSecretRequest};
