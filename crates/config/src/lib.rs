//! Configuration management for the context service
//!
//! Supports loading configuration from:
//! - YAML files under config/
//! - Environment variables (VITA_PATH_ prefix)

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, ChatConfig, LocationConfig, ObservabilityConfig, ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

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
