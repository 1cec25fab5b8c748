//! Account entity and repository trait.
//!
//! Maps to the `accounts` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::StoreError;

/// Represents a registered account.
///
/// Maps to the `accounts` table:
/// - id: UUID PRIMARY KEY
/// - handle: TEXT NOT NULL UNIQUE
/// - secret: TEXT NOT NULL
/// - joined_at: TIMESTAMPTZ NOT NULL
///
/// Deliberately not `Serialize`: the only outward representation is
/// [`SafeAccount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Assigned by the store at creation
    pub id: Uuid,

    /// Unique, immutable handle
    pub handle: String,

    /// Plaintext secret, compared byte-for-byte on login
    pub secret: String,

    /// Creation instant
    pub joined_at: DateTime<Utc>,
}

impl Account {
    /// Exact comparison against the stored secret.
    pub fn secret_matches(&self, candidate: &str) -> bool {
        self.secret.as_bytes() == candidate.as_bytes()
    }
}

/// Account projection with the secret elided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAccount {
    pub id: Uuid,
    pub handle: String,
    pub joined_at: DateTime<Utc>,
}

impl From<Account> for SafeAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            handle: account.handle,
            joined_at: account.joined_at,
        }
    }
}

/// Account fields supplied at creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub handle: String,
    pub secret: String,
    pub joined_at: DateTime<Utc>,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountChanges {
    pub secret: Option<String>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.secret.is_none()
    }

    /// Apply the supplied fields to an account in place.
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(secret) = &self.secret {
            account.secret = secret.clone();
        }
    }
}

/// Repository trait for Account data access operations.
///
/// `handle` is the lookup key for every keyed operation. Implementations must
/// reject a second account with an existing handle with a conflict error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return the stored record.
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError>;

    /// Find an account by handle.
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError>;

    /// Apply `changes` to the matching account and return the updated record.
    async fn update_by_handle(
        &self,
        handle: &str,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, StoreError>;

    /// Remove the matching account and return what was removed.
    async fn delete_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError>;
}
