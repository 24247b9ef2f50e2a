mod auth_client;
mod config;

pub use auth_client::{AuthGateway, GatewayError, HttpAuthGateway};
pub use config::Settings;

use crate::error::AuthError;

/// Load configuration and build the HTTP gateway before starting the TUI
pub fn init() -> Result<(Settings, HttpAuthGateway), AuthError> {
    // Load configuration
    let settings = Settings::new().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("\nA config.toml (or NOTES_CONFIG) may contain:");
        eprintln!("\nserver_url = \"http://localhost:3000\"");
        eprintln!("request_timeout_secs = 10");
        eprintln!("toast_duration_secs = 4");
        AuthError::from(e)
    })?;

    // Validate configuration
    settings.validate().map_err(|e| {
        eprintln!("Configuration validation failed: {}", e);
        AuthError::Configuration(e)
    })?;

    let gateway = HttpAuthGateway::new(&settings)?;
    tracing::debug!("Auth gateway ready for {}", settings.server_url);

    Ok((settings, gateway))
}
