//! Adapters layer for the Registry subsystem.
//!
//! Provides the SHA-256 identity derivation adapter and the event
//! publisher implementations, including the shared-bus bridge.

pub mod bus;
pub mod identity;
pub mod publisher;

pub use bus::BusPublisher;
pub use identity::Sha256Identity;
pub use publisher::{NoOpPublisher, PublishError, RegistryEventPublisher};
