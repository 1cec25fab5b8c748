//! # Configuration Module
//!
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_backend::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Storage backend: {}", settings.storage.backend);
//! ```

mod settings;

pub use settings::*;
