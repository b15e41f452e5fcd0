use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{api_response::ApiResponse, payload::NotificationPayload};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Making HTTP request failed: {0}")]
    Request(String),
    #[error("Transmission failed: {0}")]
    Transmission(String),
    #[error("Something bad happened with the response: {0}")]
    MalformedResponse(String),
}

/// Port trait for the transactional email API
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send one payload and return the API's answer, whatever its status
    async fn transmit(&self, payload: NotificationPayload) -> Result<ApiResponse, TransportError>;
}
