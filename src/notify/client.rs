//! HTTP client for the EmailJS transactional-email API

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use super::traits::NotificationClient;

/// EmailJS REST send endpoint
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Failure modes of one notification send
#[derive(Debug, Error)]
pub enum SendError {
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the EmailJS send API.
///
/// Holds the publishable client key supplied at startup; the service and
/// template identifiers travel per call.
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    public_key: String,
}

/// Wire format of the EmailJS send request
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a HashMap<String, String>,
}

impl EmailJsClient {
    /// Create a new client with the publishable key from configuration
    pub fn new(public_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            public_key: public_key.to_string(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(public_key: &str, endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            public_key: public_key.to_string(),
        }
    }
}

#[async_trait]
impl NotificationClient for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: HashMap<String, String>,
    ) -> Result<(), SendError> {
        let body = SendEmailBody {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: &template_params,
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
