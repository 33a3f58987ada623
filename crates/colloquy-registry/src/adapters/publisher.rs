//! Event publisher port for the Registry subsystem.
//!
//! The registry emits exactly one notification per completed mutation.
//! Implementations connect to the actual delivery mechanism; the
//! registry treats delivery as fire-and-forget.

use async_trait::async_trait;
use shared_bus::events::RegistryEvent;

/// Notification sink for the registry.
///
/// Implementations must not block the registry on slow consumers; a
/// failed publish is reported but never retried by the caller.
#[async_trait]
pub trait RegistryEventPublisher: Send + Sync {
    /// Publishes one mutation notification.
    async fn publish(&self, event: RegistryEvent) -> Result<(), PublishError>;
}

/// Error type for publish operations.
#[derive(Debug, Clone)]
pub enum PublishError {
    /// The delivery mechanism is not connected.
    NotConnected,
    /// Internal error.
    Internal(String),
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConnected => write!(f, "Notification sink not connected"),
            Self::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for PublishError {}

// Shared-ownership wiring: a sink held behind an Arc is still a sink.
#[async_trait]
impl<T: RegistryEventPublisher + ?Sized> RegistryEventPublisher for std::sync::Arc<T> {
    async fn publish(&self, event: RegistryEvent) -> Result<(), PublishError> {
        (**self).publish(event).await
    }
}

/// No-op publisher for running the registry without a bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPublisher;

#[async_trait]
impl RegistryEventPublisher for NoOpPublisher {
    async fn publish(&self, _event: RegistryEvent) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Recording publisher for testing.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingPublisher {
    pub events: std::sync::Mutex<Vec<RegistryEvent>>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<RegistryEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl RegistryEventPublisher for RecordingPublisher {
    async fn publish(&self, event: RegistryEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
