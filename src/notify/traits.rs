//! Trait abstraction for the notification client to enable mocking in tests

use async_trait::async_trait;
use std::collections::HashMap;

use super::client::SendError;

/// Trait for the outbound notification send, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Deliver one templated notification through the email service.
    ///
    /// The service and template identifiers are opaque; empty identifiers
    /// are passed through and rejected by the service.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: HashMap<String, String>,
    ) -> Result<(), SendError>;
}
