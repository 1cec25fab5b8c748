//! # Domain Entities
//!
//! The two persisted aggregates of the chat backend. They are independent:
//! a message names its sender by handle and holds no reference to an account.
//!
//! - **Account**: registered user with a unique handle and a plaintext secret
//! - **Message**: a chat line with its sender and send time
//!
//! ## Repository Traits
//!
//! Each entity has a repository trait describing the store contract. The
//! traits live here and are implemented in the infrastructure layer.

mod account;
mod message;

pub use account::{Account, AccountChanges, AccountRepository, NewAccount, SafeAccount};
pub use message::{sort_chronologically, Message, MessageRepository, NewMessage};

#[cfg(test)]
pub use account::MockAccountRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
