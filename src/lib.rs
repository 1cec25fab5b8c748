//! # Chat Backend Library
//!
//! Account and message backend for a small chat application:
//! - Account signup, login, lookup, secret reset and deletion
//! - Message storage and chronological listing
//! - WebSocket push of newly saved messages
//! - PostgreSQL or in-memory storage
//!
//! ## Module Structure
//!
//! ```text
//! chat_backend/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Account and message services, request DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, middleware, WebSocket feed
//! +-- shared/         Error types and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - entities and store contracts
pub mod domain;

// Application layer - services
pub mod application;

// Infrastructure layer - store implementations
pub mod infrastructure;

// Presentation layer - HTTP and WebSocket handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Logging setup
pub mod telemetry;
