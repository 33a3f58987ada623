//! # Event Bus Adapter
//!
//! Bridges the registry's notification sink to the shared event bus.
//!
//! ## Event Flow
//!
//! ```text
//! [RegistryService] ──RegistryEvent──→ [BusPublisher] ──→ [Event Bus]
//!                                                              │
//!                                               ┌──────────────┴─────┐
//!                                               ↓                    ↓
//!                                          [Observer A]         [Observer B]
//! ```
//!
//! A bus with no subscribers drops the event; the registry never learns
//! about observers and never waits for them.

use crate::adapters::publisher::{PublishError, RegistryEventPublisher};
use async_trait::async_trait;
use shared_bus::events::RegistryEvent;
use shared_bus::publisher::EventPublisher;
use std::sync::Arc;
use tracing::debug;

/// Notification sink backed by the shared event bus.
pub struct BusPublisher<P: EventPublisher> {
    /// The event publisher (shared bus).
    bus: Arc<P>,
}

impl<P: EventPublisher> BusPublisher<P> {
    /// Creates a new bus-backed publisher.
    pub fn new(bus: Arc<P>) -> Self {
        Self { bus }
    }

    /// Get a reference to the underlying bus.
    pub fn bus(&self) -> &P {
        &self.bus
    }
}

#[async_trait]
impl<P: EventPublisher> RegistryEventPublisher for BusPublisher<P> {
    async fn publish(&self, event: RegistryEvent) -> Result<(), PublishError> {
        let receivers = self.bus.publish(event).await;
        debug!(receivers, "Notification handed to bus");
        Ok(())
    }
}
