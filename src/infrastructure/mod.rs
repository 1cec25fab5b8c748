//! Infrastructure Layer
//!
//! Implementations of the store contracts and process-wide observability:
//! - PostgreSQL connection pool and migrations
//! - PostgreSQL and in-memory repositories
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
