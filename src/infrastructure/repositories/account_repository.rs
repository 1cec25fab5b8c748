//! Account Repository Implementation
//!
//! PostgreSQL implementation of the AccountRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Account, AccountChanges, AccountRepository, NewAccount};
use crate::infrastructure::metrics;
use crate::shared::error::StoreError;

/// Database row representation of the `accounts` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    handle: String,
    secret: String,
    joined_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            id: self.id,
            handle: self.handle,
            secret: self.secret,
            joined_at: self.joined_at,
        }
    }
}

/// PostgreSQL account repository.
///
/// Handle uniqueness is enforced by the `accounts_handle_key` constraint, so
/// concurrent signups for one handle resolve to a single winner.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, handle, secret, joined_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, handle, secret, joined_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&account.handle)
        .bind(&account.secret)
        .bind(account.joined_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db_err) if db_err.is_unique_violation()) {
                StoreError::Conflict(format!("Handle {} already exists", account.handle))
            } else {
                StoreError::Database(e)
            }
        })?;
        metrics::record_db_query("insert", "accounts", started.elapsed().as_secs_f64());

        Ok(row.into_account())
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, handle, secret, joined_at
            FROM accounts
            WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", "accounts", started.elapsed().as_secs_f64());

        Ok(row.map(AccountRow::into_account))
    }

    async fn update_by_handle(
        &self,
        handle: &str,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, StoreError> {
        let started = Instant::now();
        // COALESCE keeps columns whose change is absent.
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET secret = COALESCE($2, secret)
            WHERE handle = $1
            RETURNING id, handle, secret, joined_at
            "#,
        )
        .bind(handle)
        .bind(changes.secret.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("update", "accounts", started.elapsed().as_secs_f64());

        Ok(row.map(AccountRow::into_account))
    }

    async fn delete_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            DELETE FROM accounts
            WHERE handle = $1
            RETURNING id, handle, secret, joined_at
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("delete", "accounts", started.elapsed().as_secs_f64());

        Ok(row.map(AccountRow::into_account))
    }
}
