//! In-memory result delivery.
//!
//! Records messages instead of sending them. Used in tests and when no
//! mail provider is configured.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{DeliveryError, ResultDelivery, ResultMessage};

/// Delivery that keeps every message in memory.
///
/// Clones share the same message log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDelivery {
    sent: Arc<Mutex<Vec<ResultMessage>>>,
    failure: Option<DeliveryError>,
}

impl InMemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delivery whose every attempt fails with `error`.
    pub fn failing(error: DeliveryError) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(error),
        }
    }

    /// Returns the messages delivered so far.
    pub fn sent_messages(&self) -> Vec<ResultMessage> {
        self.log().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.log().len()
    }

    /// Locks the message log. A panic elsewhere while holding the lock
    /// leaves the recorded messages intact, so poisoning is ignored.
    fn log(&self) -> MutexGuard<'_, Vec<ResultMessage>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ResultDelivery for InMemoryDelivery {
    async fn deliver(&self, message: &ResultMessage) -> Result<(), DeliveryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        tracing::info!(
            recipient = %message.recipient,
            subject = %message.subject,
            "Recorded result message (in-memory delivery)"
        );

        self.log().push(message.clone());
        Ok(())
    }
}
