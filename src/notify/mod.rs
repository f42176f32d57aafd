//! Notification client module for the transactional-email service

mod client;
mod traits;

pub use client::{EmailJsClient, SendError};
pub use traits::NotificationClient;

#[cfg(test)]
pub use traits::MockNotificationClient;
