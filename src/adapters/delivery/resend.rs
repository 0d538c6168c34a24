//! Resend Delivery Adapter - Sends result mail through the Resend HTTP API.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{DeliveryError, ResultDelivery, ResultMessage};

/// Default Resend API endpoint.
pub const RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Configuration for the Resend adapter.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: SecretString,
    /// Formatted sender, e.g. `TOPSIS Web Service <noreply@example.com>`.
    pub from: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: SecretString, from: impl Into<String>) -> Self {
        Self {
            api_key,
            from: from.into(),
            base_url: RESEND_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
    attachments: Vec<EmailAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct EmailAttachment<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
}

/// Resend-backed result delivery.
pub struct ResendDelivery {
    config: ResendConfig,
    client: Client,
}

impl ResendDelivery {
    pub fn new(config: ResendConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_request<'a>(&'a self, message: &'a ResultMessage) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from,
            to: vec![message.recipient.as_str()],
            subject: &message.subject,
            text: &message.text_body,
            html: &message.html_body,
            attachments: vec![EmailAttachment {
                filename: &message.attachment.file_name,
                content: STANDARD.encode(&message.attachment.content),
                content_type: &message.attachment.content_type,
            }],
        }
    }
}

#[async_trait]
impl ResultDelivery for ResendDelivery {
    async fn deliver(&self, message: &ResultMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&self.to_request(message))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Transport(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    DeliveryError::Transport(format!("Connection failed: {}", e))
                } else {
                    DeliveryError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(recipient = %message.recipient, "Result mail accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Mail provider rejected result mail");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            message: body,
        })
    }
}
