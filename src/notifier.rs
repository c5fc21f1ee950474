//! Notifier trait for outbound messages

use async_trait::async_trait;

/// Trait for delivering a plain-text message to the configured recipient
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Send one message. No internal retry; retry policy belongs to the
    /// poll loop.
    async fn notify(&self, message: &str) -> crate::Result<()>;
}
