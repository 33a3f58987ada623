//! Port implementations shared across the suite.
//!
//! These stand in for the external collaborators: a switchable identity
//! provider (real SHA-256 derivation underneath), a static collection
//! directory, a table-backed balance oracle, and a settable clock.

use colloquy_registry::adapters::identity::Sha256Identity;
use colloquy_registry::domain::QuestionDraft;
use colloquy_registry::ports::outbound::{
    BalanceOracle, CollectionDirectory, IdentityProvider, TimeSource,
};
use shared_types::entities::{AssetClass, Principal, QuestionId, Timestamp};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Identity provider whose resolved caller can be switched mid-test.
///
/// Question id derivation delegates to the production SHA-256 adapter,
/// so integration flows exercise the real derivation path.
pub struct SwitchboardIdentity {
    caller: Mutex<Principal>,
}

impl SwitchboardIdentity {
    pub fn new(caller: Principal) -> Self {
        Self {
            caller: Mutex::new(caller),
        }
    }

    /// Switches the principal subsequent calls resolve to.
    pub fn set_caller(&self, caller: Principal) {
        *self.caller.lock().unwrap() = caller;
    }
}

impl IdentityProvider for SwitchboardIdentity {
    fn resolve_caller(&self) -> Principal {
        *self.caller.lock().unwrap()
    }

    fn derive_question_id(&self, creator: &Principal, seed: &[u8]) -> QuestionId {
        Sha256Identity::new(*creator).derive_question_id(creator, seed)
    }
}

/// Collection directory backed by a fixed set.
#[derive(Default)]
pub struct StaticDirectory {
    known: HashSet<(Principal, Vec<u8>)>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, owner: Principal, name: &[u8]) -> Self {
        self.known.insert((owner, name.to_vec()));
        self
    }
}

impl CollectionDirectory for StaticDirectory {
    fn exists(&self, owner: &Principal, name: &[u8]) -> bool {
        self.known.contains(&(*owner, name.to_vec()))
    }
}

/// Balance oracle backed by a fixed table; unknown holders have zero.
#[derive(Default)]
pub struct TableOracle {
    balances: HashMap<(AssetClass, Principal), u64>,
}

impl TableOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, asset: AssetClass, holder: Principal, amount: u64) -> Self {
        self.balances.insert((asset, holder), amount);
        self
    }
}

impl BalanceOracle for TableOracle {
    fn balance_of(&self, asset: &AssetClass, holder: &Principal) -> u64 {
        self.balances
            .get(&(asset.clone(), *holder))
            .copied()
            .unwrap_or(0)
    }
}

/// Settable, advanceable clock.
pub struct FixedClock {
    time: AtomicU64,
}

impl FixedClock {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: u64) {
        self.time.fetch_add(secs, Ordering::SeqCst);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

/// Principal with a repeated byte pattern.
pub fn principal(byte: u8) -> Principal {
    Principal::from_bytes([byte; 32])
}

/// Answer id with a repeated byte pattern.
pub fn answer(byte: u8) -> [u8; 32] {
    [byte; 32]
}

/// Ungated draft with the given seed.
pub fn draft(seed: &[u8]) -> QuestionDraft {
    QuestionDraft {
        seed: seed.to_vec(),
        title: "How do observers detect lag?".into(),
        topic: "infrastructure".into(),
        description: "Asking for the broadcast channel semantics.".into(),
        image: "ipfs://diagram".into(),
        gate: None,
    }
}
