//! In-Memory Repositories
//!
//! Process-local implementations of the repository traits, used by the
//! `memory` storage backend and by tests. Contents are lost on restart.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{
    Account, AccountChanges, AccountRepository, Message, MessageRepository, NewAccount, NewMessage,
};
use crate::shared::error::StoreError;

/// Accounts keyed by handle.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, StoreError> {
        // The entry lock makes check-and-insert atomic per handle.
        match self.accounts.entry(account.handle.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(format!(
                "Handle {} already exists",
                account.handle
            ))),
            Entry::Vacant(slot) => {
                let stored = Account {
                    id: Uuid::now_v7(),
                    handle: account.handle.clone(),
                    secret: account.secret.clone(),
                    joined_at: account.joined_at,
                };
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(handle).map(|entry| entry.value().clone()))
    }

    async fn update_by_handle(
        &self,
        handle: &str,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get_mut(handle).map(|mut entry| {
            changes.apply_to(entry.value_mut());
            entry.value().clone()
        }))
    }

    async fn delete_by_handle(&self, handle: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.remove(handle).map(|(_, account)| account))
    }
}

/// Messages in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, StoreError> {
        let stored = Message {
            id: Uuid::now_v7(),
            body: message.body.clone(),
            sender: message.sender.clone(),
            sent_at: message.sent_at,
        };
        self.messages.write().push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.messages.read().clone())
    }
}
