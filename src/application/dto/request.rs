//! Request DTOs
//!
//! Data structures for API request bodies. Missing string fields deserialize
//! as empty so the services report them as validation failures.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::services::{CreateMessageDto, CredentialsDto, UpdateAccountDto};

/// Signup and login request
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default, alias = "username")]
    pub handle: String,

    #[serde(default, alias = "password")]
    pub secret: String,
}

impl From<CredentialsRequest> for CredentialsDto {
    fn from(request: CredentialsRequest) -> Self {
        CredentialsDto::new(request.handle, request.secret)
    }
}

/// Secret reset request
#[derive(Debug, Deserialize)]
pub struct ResetSecretRequest {
    #[serde(default, alias = "username")]
    pub handle: String,

    /// The replacement secret
    #[serde(default, alias = "password")]
    pub secret: Option<String>,
}

impl ResetSecretRequest {
    pub fn into_parts(self) -> (String, UpdateAccountDto) {
        (
            self.handle,
            UpdateAccountDto {
                secret: self.secret,
            },
        )
    }
}

/// Add message request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageRequest {
    #[serde(default)]
    pub message_to_add: NewMessageBody,
}

/// Message payload inside [`AddMessageRequest`]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageBody {
    #[serde(default, alias = "msg")]
    pub body: String,

    #[serde(default, alias = "msgFrom")]
    pub sender: String,

    #[serde(default, alias = "msgDateTime")]
    pub sent_at: Option<DateTime<Utc>>,
}

impl From<AddMessageRequest> for CreateMessageDto {
    fn from(request: AddMessageRequest) -> Self {
        let body = request.message_to_add;
        CreateMessageDto {
            body: body.body,
            sender: body.sender,
            sent_at: body.sent_at,
        }
    }
}
