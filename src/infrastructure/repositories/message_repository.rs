//! Message Repository Implementation
//!
//! PostgreSQL implementation of the MessageRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Message, MessageRepository, NewMessage};
use crate::infrastructure::metrics;
use crate::shared::error::StoreError;

#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    body: String,
    sender: String,
    sent_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            body: row.body,
            sender: row.sender,
            sent_at: row.sent_at,
        }
    }
}

/// PostgreSQL message repository.
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (id, body, sender, sent_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, body, sender, sent_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&message.body)
        .bind(&message.sender)
        .bind(message.sent_at)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_db_query("insert", "messages", started.elapsed().as_secs_f64());

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, body, sender, sent_at
            FROM messages
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select", "messages", started.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
