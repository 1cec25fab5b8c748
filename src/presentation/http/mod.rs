//! HTTP Dispatch
//!
//! Maps method/path to handlers and typed results to status + JSON body.

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::JsonBody;
pub use routes::create_router;
