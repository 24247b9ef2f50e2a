use thiserror::Error;

// Endpoint paths, relative to `Settings::server_url`
pub const SIGNIN_PATH: &str = "/api/auth/signin";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// The request never produced a usable `AuthResponse`
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}
