//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{chat, endpoints, geolocation};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Location resolver configuration
    #[serde(default)]
    pub location: LocationConfig,

    /// Chat assistant configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_location()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_sessions".to_string(),
                message: "Max sessions must be at least 1".to_string(),
            });
        }

        if self.server.session_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.session_timeout_seconds".to_string(),
                message: "Session timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    fn validate_location(&self) -> Result<(), ConfigError> {
        if self.location.acquire_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "location.acquire_timeout_ms".to_string(),
                message: "Acquisition timeout must be positive".to_string(),
            });
        }

        if self.location.geocoder_base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "location.geocoder_base_url".to_string(),
                message: "Geocoder base URL cannot be empty".to_string(),
            });
        }

        if self.location.acquire_timeout_ms > self.location.max_fix_age_ms {
            tracing::warn!(
                "location.acquire_timeout_ms ({}) exceeds max_fix_age_ms ({}); a fix may \
                 expire before a slow acquisition completes",
                self.location.acquire_timeout_ms,
                self.location.max_fix_age_ms
            );
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum concurrent chat sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle session expiry (seconds)
    #[serde(default = "default_session_timeout")]
    pub session_timeout_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_max_sessions() -> usize {
    100
}
fn default_session_timeout() -> u64 {
    3600
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            // Empty by default - must be explicitly configured for production
            cors_origins: Vec::new(),
            max_sessions: default_max_sessions(),
            session_timeout_seconds: default_session_timeout(),
        }
    }
}

/// Location resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Reverse-geocoding provider base URL
    #[serde(default = "default_geocoder_base_url")]
    pub geocoder_base_url: String,

    /// API key passed to the geocoding provider (if it requires one)
    #[serde(default)]
    pub geocoder_api_key: Option<String>,

    /// Maximum wait for a position fix (ms)
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,

    /// Maximum age of a cached fix that is still acceptable (ms)
    #[serde(default = "default_max_fix_age_ms")]
    pub max_fix_age_ms: u64,

    /// Fixed position used as the device source when no client supplies
    /// coordinates (development deployments). `None` means acquisition
    /// fails as "unavailable" and the fallback place is substituted.
    #[serde(default)]
    pub fixed_latitude: Option<f64>,
    #[serde(default)]
    pub fixed_longitude: Option<f64>,

    /// Run an initial resolution at startup
    #[serde(default = "default_true")]
    pub resolve_on_start: bool,
}

fn default_geocoder_base_url() -> String {
    endpoints::GEOCODER_DEFAULT.to_string()
}
fn default_acquire_timeout_ms() -> u64 {
    geolocation::ACQUIRE_TIMEOUT_MS
}
fn default_max_fix_age_ms() -> u64 {
    geolocation::MAX_FIX_AGE_MS
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            geocoder_base_url: default_geocoder_base_url(),
            geocoder_api_key: None,
            acquire_timeout_ms: default_acquire_timeout_ms(),
            max_fix_age_ms: default_max_fix_age_ms(),
            fixed_latitude: None,
            fixed_longitude: None,
            resolve_on_start: true,
        }
    }
}

/// Chat assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Cosmetic delay before a bot reply is appended (ms)
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

fn default_response_delay_ms() -> u64 {
    chat::RESPONSE_DELAY_MS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (VITA_PATH_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VITA_PATH")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.location.acquire_timeout_ms, 10_000);
        assert_eq!(settings.location.max_fix_age_ms, 300_000);
        assert_eq!(settings.chat.response_delay_ms, 1_500);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();

        settings.server.port = 0;
        assert!(settings.validate().is_err());
        settings.server.port = 8080;

        settings.server.max_sessions = 0;
        assert!(settings.validate().is_err());
        settings.server.max_sessions = 100;

        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_location_validation() {
        let mut settings = Settings::default();

        settings.location.acquire_timeout_ms = 0;
        assert!(settings.validate().is_err());
        settings.location.acquire_timeout_ms = 10_000;

        settings.location.geocoder_base_url = String::new();
        assert!(settings.validate().is_err());
    }
}
