//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::StoreError;

/// Represents a chat message.
///
/// Maps to the `messages` table:
/// - id: UUID PRIMARY KEY
/// - body: TEXT NOT NULL
/// - sender: TEXT NOT NULL (authoring handle, not a foreign key)
/// - sent_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Assigned by the store at creation
    pub id: Uuid,

    /// Message content
    pub body: String,

    /// Handle of the author
    pub sender: String,

    /// When the message was sent
    pub sent_at: DateTime<Utc>,
}

/// Message fields supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub body: String,
    pub sender: String,
    pub sent_at: DateTime<Utc>,
}

/// Sort messages oldest first. Equal timestamps keep their relative order.
pub fn sort_chronologically(messages: &mut [Message]) {
    messages.sort_by_key(|m| m.sent_at);
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message and return the stored record.
    async fn create(&self, message: &NewMessage) -> Result<Message, StoreError>;

    /// Fetch every stored message, in no particular order.
    async fn find_all(&self) -> Result<Vec<Message>, StoreError>;
}
