//! Message Service
//!
//! Handles saving chat messages and reading them back in send order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::{sort_chronologically, Message, MessageRepository, NewMessage};
use crate::infrastructure::metrics;
use crate::shared::error::Failure;
use crate::shared::validation::validation_failure;

const SAVE_FAILED: &str = "Failed to save message";

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Persist a message and return the stored record
    async fn save_message(&self, request: CreateMessageDto) -> Result<Message, Failure>;

    /// All messages, oldest first.
    ///
    /// A store fault yields an empty list, so callers cannot tell "no messages"
    /// from "read error" at this layer.
    async fn list_messages(&self) -> Vec<Message>;
}

/// Create message request
#[derive(Debug, Clone, Validate)]
pub struct CreateMessageDto {
    #[validate(length(min = 1, message = "Message content is required"))]
    pub body: String,

    #[validate(length(min = 1, message = "Message sender is required"))]
    pub sender: String,

    /// Defaults to the time of the call
    pub sent_at: Option<DateTime<Utc>>,
}

impl CreateMessageDto {
    pub fn new(body: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            sender: sender.into(),
            sent_at: None,
        }
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<M>
where
    M: MessageRepository,
{
    message_repo: Arc<M>,
}

impl<M> MessageServiceImpl<M>
where
    M: MessageRepository,
{
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }
}

#[async_trait]
impl<M> MessageService for MessageServiceImpl<M>
where
    M: MessageRepository + 'static,
{
    async fn save_message(&self, request: CreateMessageDto) -> Result<Message, Failure> {
        const OP: &str = "save_message";

        if let Err(e) = request.validate() {
            let failure = validation_failure(e);
            metrics::record_service_failure(OP, failure.kind.as_str());
            return Err(failure);
        }

        let new_message = NewMessage {
            body: request.body,
            sender: request.sender,
            sent_at: request.sent_at.unwrap_or_else(Utc::now),
        };

        let message = self.message_repo.create(&new_message).await.map_err(|e| {
            tracing::error!(sender = %new_message.sender, error = %e, "Failed to save message");
            let failure = Failure::storage(SAVE_FAILED);
            metrics::record_service_failure(OP, failure.kind.as_str());
            failure
        })?;

        tracing::debug!(message_id = %message.id, sender = %message.sender, "Message saved");
        Ok(message)
    }

    async fn list_messages(&self) -> Vec<Message> {
        match self.message_repo.find_all().await {
            Ok(mut messages) => {
                sort_chronologically(&mut messages);
                messages
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to list messages");
                metrics::record_service_failure("list_messages", "storage");
                Vec::new()
            }
        }
    }
}
