//! Result Delivery Port - Sending a finished analysis to the requester.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EmailAddress;

/// Port for transmitting analysis results.
///
/// # Contract
///
/// Implementations must:
/// - Deliver the text body, HTML body, and attachment as one message
/// - Report failures instead of retrying silently
#[async_trait]
pub trait ResultDelivery: Send + Sync {
    /// Sends the message to its recipient.
    async fn deliver(&self, message: &ResultMessage) -> Result<(), DeliveryError>;
}

/// A composed result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMessage {
    pub recipient: EmailAddress,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub attachment: Attachment,
}

/// A file attached to a result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Creates a CSV attachment.
    pub fn csv(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "text/csv".to_string(),
            content: content.into(),
        }
    }
}

/// Errors from delivery operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Delivery transport failed: {0}")]
    Transport(String),

    #[error("Delivery rejected by provider ({status}): {message}")]
    Rejected { status: u16, message: String },
}
