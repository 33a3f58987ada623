//! # Colloquy Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Port implementations shared by the suite
//! │
//! └── integration/      # Cross-crate flows
//!     ├── flows.rs      # Operations observed end-to-end via the bus
//!     └── invariants.rs # Counter lockstep, atomicity, aliasing
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p colloquy-tests
//!
//! # By category
//! cargo test -p colloquy-tests integration::flows::
//! cargo test -p colloquy-tests integration::invariants::
//! ```

pub mod fixtures;

#[cfg(test)]
mod integration;
