use crate::events::{DataEvent, RequestId};
use notes_auth::{AuthGateway, SigninRequest, SignupRequest};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs auth requests against the gateway and reports outcomes as `DataEvent`s
pub struct AuthRequester<G: AuthGateway> {
    pub gateway: Arc<G>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

// Manual impl: the gateway sits behind an Arc, so G itself need not be Clone
impl<G: AuthGateway> Clone for AuthRequester<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            data_tx: self.data_tx.clone(),
        }
    }
}

impl<G: AuthGateway> AuthRequester<G> {
    pub fn new(gateway: Arc<G>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { gateway, data_tx }
    }

    pub async fn signin(&self, request_id: RequestId, req: SigninRequest) {
        tracing::info!("Signing in {} (request #{})", req.email, request_id);

        let event = match self.gateway.signin(&req).await {
            Ok(response) => DataEvent::SigninCompleted {
                request_id,
                response,
            },
            Err(e) => {
                tracing::error!("Sign-in request #{} failed: {}", request_id, e);
                DataEvent::SigninFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };
        self.send(event);
    }

    pub async fn signup(&self, request_id: RequestId, req: SignupRequest) {
        tracing::info!("Signing up {} (request #{})", req.email, request_id);

        let event = match self.gateway.signup(&req).await {
            Ok(response) => DataEvent::SignupCompleted {
                request_id,
                response,
            },
            Err(e) => {
                tracing::error!("Sign-up request #{} failed: {}", request_id, e);
                DataEvent::SignupFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };
        self.send(event);
    }

    fn send(&self, event: DataEvent) {
        if self.data_tx.send(event).is_err() {
            // UI loop is gone (shutdown)
            tracing::debug!("Dropping auth result, receiver closed");
        }
    }
}
