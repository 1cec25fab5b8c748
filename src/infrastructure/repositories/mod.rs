//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer.
//!
//! ## Available Repositories
//!
//! - **PgAccountRepository** / **PgMessageRepository**: PostgreSQL via sqlx
//! - **InMemoryAccountRepository** / **InMemoryMessageRepository**: process-local
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgAccountRepository, PgMessageRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let account_repo = PgAccountRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool);
//! }
//! ```

pub mod account_repository;
pub mod memory;
pub mod message_repository;

pub use account_repository::PgAccountRepository;
pub use memory::{InMemoryAccountRepository, InMemoryMessageRepository};
pub use message_repository::PgMessageRepository;
