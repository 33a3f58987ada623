//! SHA-256 identity adapter.
//!
//! Derives question identifiers from (creator, seed) with a single
//! domain-separated SHA-256 pass. Collision resistance is inherited
//! from SHA-256; the length prefix on the seed keeps distinct
//! (creator, seed) splices from hashing to the same input.

use crate::domain::{Principal, QuestionId};
use crate::ports::outbound::IdentityProvider;
use sha2::{Digest, Sha256};

/// Domain-separation tag for question id derivation.
const QUESTION_ID_TAG: &[u8] = b"colloquy.question-id.v1";

/// Identity provider backed by SHA-256 derivation.
///
/// Carries the principal authenticated at the call boundary; transport
/// authentication itself happens outside the registry.
#[derive(Debug, Clone)]
pub struct Sha256Identity {
    caller: Principal,
}

impl Sha256Identity {
    /// Creates a provider resolving to the given authenticated caller.
    #[must_use]
    pub fn new(caller: Principal) -> Self {
        Self { caller }
    }
}

impl IdentityProvider for Sha256Identity {
    fn resolve_caller(&self) -> Principal {
        self.caller
    }

    fn derive_question_id(&self, creator: &Principal, seed: &[u8]) -> QuestionId {
        let mut hasher = Sha256::new();
        hasher.update(QUESTION_ID_TAG);
        hasher.update(creator.as_bytes());
        hasher.update((seed.len() as u64).to_be_bytes());
        hasher.update(seed);

        let digest = hasher.finalize();
        let mut id = [0u8; 32];
        id.copy_from_slice(&digest);
        id
    }
}
