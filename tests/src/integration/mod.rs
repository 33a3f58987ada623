//! Cross-crate integration tests.

mod invariants;
