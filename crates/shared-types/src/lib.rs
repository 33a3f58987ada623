//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the registry and
//! the event bus.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Wire-Representable**: Every entity derives serde traits; records
//!   built from these types can be handed to external observers without
//!   conversion.
//! - **No Behavior**: Entities carry data and cheap accessors only; all
//!   registry semantics live in `colloquy-registry`.

pub mod entities;

pub use entities::*;
