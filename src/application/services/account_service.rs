//! Account Service
//!
//! Signup, login, lookup, partial update and deletion of accounts. Every
//! operation returns the secret-free [`SafeAccount`] projection or a typed
//! [`Failure`]; repository faults are logged here and never passed on.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use crate::domain::{AccountChanges, AccountRepository, NewAccount, SafeAccount};
use crate::infrastructure::metrics;
use crate::shared::error::Failure;
use crate::shared::validation::validation_failure;

const SAVE_FAILED: &str = "Failed to save user";
const LOGIN_FAILED: &str = "Failed to login";
const GET_FAILED: &str = "Failed to get user";
const UPDATE_FAILED: &str = "Failed to update user details";
const DELETE_FAILED: &str = "Failed to delete user";
const NOT_FOUND: &str = "User not found";
const INVALID_CREDENTIALS: &str = "Invalid username or password";
const HANDLE_REQUIRED: &str = "Handle is required";

/// Account service trait
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account
    async fn create_account(&self, request: CredentialsDto) -> Result<SafeAccount, Failure>;

    /// Check a handle/secret pair
    async fn authenticate(&self, credentials: CredentialsDto) -> Result<SafeAccount, Failure>;

    /// Get account by handle
    async fn fetch_by_handle(&self, handle: &str) -> Result<SafeAccount, Failure>;

    /// Apply the supplied fields to an account
    async fn update_account(
        &self,
        handle: &str,
        update: UpdateAccountDto,
    ) -> Result<SafeAccount, Failure>;

    /// Delete an account, returning what was removed
    async fn delete_account(&self, handle: &str) -> Result<SafeAccount, Failure>;
}

/// Handle/secret pair used for signup and login
#[derive(Debug, Clone, Validate)]
pub struct CredentialsDto {
    #[validate(length(min = 1, message = "Handle is required"))]
    pub handle: String,

    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
}

impl CredentialsDto {
    pub fn new(handle: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            secret: secret.into(),
        }
    }
}

/// Partial account update
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateAccountDto {
    #[validate(length(min = 1, message = "Secret must not be empty"))]
    pub secret: Option<String>,
}

impl From<UpdateAccountDto> for AccountChanges {
    fn from(update: UpdateAccountDto) -> Self {
        Self {
            secret: update.secret,
        }
    }
}

/// AccountService implementation
pub struct AccountServiceImpl<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
}

impl<A> AccountServiceImpl<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>) -> Self {
        Self { account_repo }
    }
}

/// Count the failure and hand it back.
fn reject(operation: &'static str, failure: Failure) -> Failure {
    metrics::record_service_failure(operation, failure.kind.as_str());
    failure
}

fn require_handle(operation: &'static str, handle: &str) -> Result<(), Failure> {
    if handle.is_empty() {
        return Err(reject(operation, Failure::validation(HANDLE_REQUIRED)));
    }
    Ok(())
}

#[async_trait]
impl<A> AccountService for AccountServiceImpl<A>
where
    A: AccountRepository + 'static,
{
    async fn create_account(&self, request: CredentialsDto) -> Result<SafeAccount, Failure> {
        const OP: &str = "create_account";

        request
            .validate()
            .map_err(|e| reject(OP, validation_failure(e)))?;

        let new_account = NewAccount {
            handle: request.handle,
            secret: request.secret,
            joined_at: Utc::now(),
        };

        let account = self.account_repo.create(&new_account).await.map_err(|e| {
            if e.is_conflict() {
                tracing::warn!(handle = %new_account.handle, "Handle already taken");
            } else {
                tracing::error!(handle = %new_account.handle, error = %e, "Failed to save account");
            }
            reject(OP, Failure::storage(SAVE_FAILED))
        })?;

        tracing::info!(account_id = %account.id, handle = %account.handle, "Account created");
        Ok(SafeAccount::from(account))
    }

    async fn authenticate(&self, credentials: CredentialsDto) -> Result<SafeAccount, Failure> {
        const OP: &str = "authenticate";

        credentials
            .validate()
            .map_err(|e| reject(OP, validation_failure(e)))?;

        let account = self
            .account_repo
            .find_by_handle(&credentials.handle)
            .await
            .map_err(|e| {
                tracing::error!(handle = %credentials.handle, error = %e, "Login lookup failed");
                reject(OP, Failure::storage(LOGIN_FAILED))
            })?;

        // Unknown handle and wrong secret must be indistinguishable.
        match account {
            Some(account) if account.secret_matches(&credentials.secret) => {
                Ok(SafeAccount::from(account))
            }
            _ => Err(reject(OP, Failure::invalid_credentials(INVALID_CREDENTIALS))),
        }
    }

    async fn fetch_by_handle(&self, handle: &str) -> Result<SafeAccount, Failure> {
        const OP: &str = "fetch_by_handle";
        require_handle(OP, handle)?;

        let account = self
            .account_repo
            .find_by_handle(handle)
            .await
            .map_err(|e| {
                tracing::error!(handle = %handle, error = %e, "Account lookup failed");
                reject(OP, Failure::storage(GET_FAILED))
            })?
            .ok_or_else(|| reject(OP, Failure::not_found(NOT_FOUND)))?;

        Ok(SafeAccount::from(account))
    }

    async fn update_account(
        &self,
        handle: &str,
        update: UpdateAccountDto,
    ) -> Result<SafeAccount, Failure> {
        const OP: &str = "update_account";
        require_handle(OP, handle)?;

        update
            .validate()
            .map_err(|e| reject(OP, validation_failure(e)))?;

        let changes = AccountChanges::from(update);
        if changes.is_empty() {
            return Err(reject(OP, Failure::validation("No fields to update")));
        }

        let account = self
            .account_repo
            .update_by_handle(handle, &changes)
            .await
            .map_err(|e| {
                tracing::error!(handle = %handle, error = %e, "Account update failed");
                reject(OP, Failure::storage(UPDATE_FAILED))
            })?
            .ok_or_else(|| reject(OP, Failure::not_found(NOT_FOUND)))?;

        tracing::info!(account_id = %account.id, handle = %account.handle, "Account updated");
        Ok(SafeAccount::from(account))
    }

    async fn delete_account(&self, handle: &str) -> Result<SafeAccount, Failure> {
        const OP: &str = "delete_account";
        require_handle(OP, handle)?;

        let account = self
            .account_repo
            .delete_by_handle(handle)
            .await
            .map_err(|e| {
                tracing::error!(handle = %handle, error = %e, "Account deletion failed");
                reject(OP, Failure::storage(DELETE_FAILED))
            })?
            .ok_or_else(|| reject(OP, Failure::not_found(NOT_FOUND)))?;

        tracing::info!(account_id = %account.id, handle = %account.handle, "Account deleted");
        Ok(SafeAccount::from(account))
    }
}
