mod models;

use crate::client::Settings;
use crate::common::{AuthResponse, SigninRequest, SignupRequest};
pub use models::GatewayError;
use models::{SIGNIN_PATH, SIGNUP_PATH};
use reqwest::Client;
use serde::Serialize;
use std::future::Future;

/// Remote credential verification and account creation
///
/// `Ok` means the server answered with an `AuthResponse`, whatever its
/// `success` flag says (or whether it is present). `Err` means no usable
/// answer was received.
pub trait AuthGateway: Send + Sync + 'static {
    fn signin(
        &self,
        req: &SigninRequest,
    ) -> impl Future<Output = Result<AuthResponse, GatewayError>> + Send;

    fn signup(
        &self,
        req: &SignupRequest,
    ) -> impl Future<Output = Result<AuthResponse, GatewayError>> + Send;
}

/// `AuthGateway` over HTTP with a cookie store, so session cookies set by the
/// server are sent back on later requests.
pub struct HttpAuthGateway {
    http_client: Client,
    server_url: String,
}

impl HttpAuthGateway {
    pub fn new(settings: &Settings) -> Result<Self, GatewayError> {
        let http_client = Client::builder()
            .cookie_store(true)
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            http_client,
            server_url: settings.server_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, GatewayError> {
        let url = format!("{}{}", self.server_url, path);
        tracing::debug!("POST {}", url);

        let resp = self.http_client.post(&url).json(body).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        let decoded = serde_json::from_slice::<AuthResponse>(&bytes);

        if status.is_success() {
            return match decoded {
                Ok(auth_response) => {
                    tracing::debug!(
                        "POST {} -> {} (success={:?})",
                        path,
                        status,
                        auth_response.success
                    );
                    Ok(auth_response)
                }
                Err(e) => {
                    tracing::warn!("POST {} returned an undecodable body: {}", path, e);
                    Err(GatewayError::Decode(e))
                }
            };
        }

        // Error statuses only count as an answer when the body carries the success flag
        match decoded {
            Ok(auth_response) if auth_response.success.is_some() => {
                tracing::debug!("POST {} -> {} with an auth body", path, status);
                Ok(auth_response)
            }
            _ => {
                tracing::warn!("POST {} failed with status {}", path, status);
                Err(GatewayError::Status(status.as_u16()))
            }
        }
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn signin(&self, req: &SigninRequest) -> Result<AuthResponse, GatewayError> {
        self.post(SIGNIN_PATH, req).await
    }

    async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, GatewayError> {
        self.post(SIGNUP_PATH, req).await
    }
}
