//! # Domain Layer
//!
//! Entities and the repository contracts the services depend on.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities are plain values with no shared mutable state

pub mod entities;

pub use entities::*;
