//! # Shared Bus - Registry Notification Stream
//!
//! Append-only notification fan-out for the registry. Every completed
//! mutation is published here exactly once, in mutation order, for
//! consumption by external observers.
//!
//! ## Delivery Model
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Registry   │                    │  Observer    │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! - **Fire-and-forget**: publishing never fails from the registry's
//!   perspective; a bus with no subscribers drops the event and logs it.
//! - **Write-only for the registry**: events are never read back to
//!   reconstruct state.
//! - **Observer isolation**: a slow or dropped subscriber never blocks
//!   the registry; lagged subscribers skip ahead and lose old events.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, RegistryEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
