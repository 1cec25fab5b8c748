//! Application Layer
//!
//! Account and message services, plus the request DTOs the HTTP layer
//! decodes into before calling them.

pub mod services;
pub mod dto;
