//! # Core Domain Entities
//!
//! Defines the identity and gating primitives used across the workspace.
//!
//! ## Clusters
//!
//! - **Identity**: `Principal`, `Hash`, `QuestionId`, `AnswerId`
//! - **Gating**: `AssetClass`
//! - **Time**: `Timestamp`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte hash (SHA-256 output).
pub type Hash = [u8; 32];

/// Identifier of a question, derived deterministically from the creator
/// principal and a caller-supplied seed.
pub type QuestionId = Hash;

/// Identifier of an answer, supplied by the submitting caller.
///
/// Uniqueness is enforced per question only. Callers that want an answer
/// id to be globally unique must guarantee that themselves; the registry's
/// collected-answer index is keyed by answer id alone.
pub type AnswerId = Hash;

/// Seconds since the UNIX epoch.
pub type Timestamp = u64;

/// A participant's account identity.
///
/// Opaque 32-byte value resolved by the identity provider at the call
/// boundary. Ordered so it can key `BTreeSet` membership collections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Principal(pub [u8; 32]);

impl Principal {
    /// Builds a principal from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw byte view, for hashing and derivation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Principal {
    /// Short hex form (first four bytes), for logs and error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Descriptor of the asset type backing a balance gate.
///
/// Opaque to the registry; only the balance oracle interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetClass(String);

impl AssetClass {
    /// Creates a descriptor from any string-like value.
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    /// The raw descriptor string.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
