//! Application Services
//!
//! The decision logic of the backend: validation, store access and the mapping
//! of store faults to typed failures.
//!
//! ## Available Services
//!
//! - **AccountService**: signup, login, lookup, secret reset, deletion
//! - **MessageService**: saving and listing chat messages

pub mod account_service;
pub mod message_service;

pub use account_service::{AccountService, AccountServiceImpl, CredentialsDto, UpdateAccountDto};
pub use message_service::{CreateMessageDto, MessageService, MessageServiceImpl};
