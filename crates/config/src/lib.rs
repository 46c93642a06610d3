//! Configuration management for the shop agent
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables (SHOP_AGENT_ prefix, `__` section separator)
//! - Per-field serde defaults when neither source sets a value

pub mod backends;
pub mod retrieval;
pub mod settings;
pub mod sql;

pub use backends::{
    CompletionSettings, EmbeddingSettings, RerankerSettings, SupabaseSettings,
};
pub use retrieval::RetrievalSettings;
pub use settings::{load_settings, Settings};
pub use sql::SqlSettings;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for shop_agent_core::Error {
    fn from(err: ConfigError) -> Self {
        shop_agent_core::Error::Config(err.to_string())
    }
}
