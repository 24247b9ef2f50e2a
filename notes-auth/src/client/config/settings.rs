use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::time::Duration;

/// Upper bound for `request_timeout_secs` (5 minutes)
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Upper bound for `toast_duration_secs` (1 hour)
pub const MAX_TOAST_DURATION_SECS: u64 = 3600;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_toast_duration_secs() -> u64 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            toast_duration_secs: default_toast_duration_secs(),
        }
    }
}

impl Settings {
    /// Load settings from `$NOTES_CONFIG` (or `config.toml`), overridden by `NOTES__*` env vars
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("NOTES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load(&config_path)
    }

    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("NOTES").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server_url.is_empty() {
            return Err("server_url is required".to_string());
        }
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err("server_url must be a valid HTTP(S) URL".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(format!(
                "request_timeout_secs must be at most {}",
                MAX_REQUEST_TIMEOUT_SECS
            ));
        }
        if self.toast_duration_secs == 0 || self.toast_duration_secs > MAX_TOAST_DURATION_SECS {
            return Err(format!(
                "toast_duration_secs must be between 1 and {}",
                MAX_TOAST_DURATION_SECS
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}
