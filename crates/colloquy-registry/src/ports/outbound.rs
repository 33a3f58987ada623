//! Outbound (Driven) ports for the Registry subsystem.
//!
//! These traits define the external collaborators the registry needs:
//! identity resolution and id derivation, collection existence lookup,
//! balance lookup, and a time source. All are synchronous and
//! side-effect-free from the registry's point of view.

use crate::domain::{AssetClass, Principal, QuestionId, Timestamp};

/// Identity capability: resolves the calling principal and derives
/// deterministic question identifiers.
pub trait IdentityProvider: Send + Sync {
    /// Resolves the principal performing the current call.
    fn resolve_caller(&self) -> Principal;

    /// Derives the question id for (creator, seed).
    ///
    /// Must be deterministic and collision-resistant: equal inputs give
    /// equal ids, and distinct inputs must not collide in practice.
    fn derive_question_id(&self, creator: &Principal, seed: &[u8]) -> QuestionId;
}

/// Collection existence lookup.
///
/// Collections are owned and managed elsewhere; the registry only asks
/// whether one exists when a gated question is created.
pub trait CollectionDirectory: Send + Sync {
    /// Whether a collection named `name` exists under `owner`.
    fn exists(&self, owner: &Principal, name: &[u8]) -> bool;
}

/// Balance lookup for gated answer submission.
pub trait BalanceOracle: Send + Sync {
    /// Current balance of `holder` in the given asset class.
    fn balance_of(&self, asset: &AssetClass, holder: &Principal) -> u64;
}

/// Time source for notification timestamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds since the UNIX epoch.
    fn now(&self) -> Timestamp;
}

// Shared-ownership wiring: a port held behind an Arc is still a port.
impl<T: IdentityProvider + ?Sized> IdentityProvider for std::sync::Arc<T> {
    fn resolve_caller(&self) -> Principal {
        (**self).resolve_caller()
    }

    fn derive_question_id(&self, creator: &Principal, seed: &[u8]) -> QuestionId {
        (**self).derive_question_id(creator, seed)
    }
}

impl<T: CollectionDirectory + ?Sized> CollectionDirectory for std::sync::Arc<T> {
    fn exists(&self, owner: &Principal, name: &[u8]) -> bool {
        (**self).exists(owner, name)
    }
}

impl<T: BalanceOracle + ?Sized> BalanceOracle for std::sync::Arc<T> {
    fn balance_of(&self, asset: &AssetClass, holder: &Principal) -> u64 {
        (**self).balance_of(asset, holder)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Mock identity provider for testing.
#[cfg(test)]
pub struct MockIdentity {
    caller: std::sync::Mutex<Principal>,
}

#[cfg(test)]
impl MockIdentity {
    pub fn new(caller: Principal) -> Self {
        Self {
            caller: std::sync::Mutex::new(caller),
        }
    }

    /// Switches the principal subsequent calls resolve to.
    pub fn set_caller(&self, caller: Principal) {
        *self.caller.lock().unwrap() = caller;
    }
}

#[cfg(test)]
impl IdentityProvider for MockIdentity {
    fn resolve_caller(&self) -> Principal {
        *self.caller.lock().unwrap()
    }

    fn derive_question_id(&self, creator: &Principal, seed: &[u8]) -> QuestionId {
        // Cheap deterministic mixing, good enough for unit tests.
        let mut id = *creator.as_bytes();
        for (i, byte) in seed.iter().enumerate() {
            id[i % 32] ^= *byte;
        }
        id
    }
}

/// Mock collection directory for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockDirectory {
    known: std::collections::HashSet<(Principal, Vec<u8>)>,
}

#[cfg(test)]
impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, owner: Principal, name: &[u8]) -> Self {
        self.known.insert((owner, name.to_vec()));
        self
    }
}

#[cfg(test)]
impl CollectionDirectory for MockDirectory {
    fn exists(&self, owner: &Principal, name: &[u8]) -> bool {
        self.known.contains(&(*owner, name.to_vec()))
    }
}

/// Mock balance oracle for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockOracle {
    balances: std::collections::HashMap<(AssetClass, Principal), u64>,
}

#[cfg(test)]
impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, asset: AssetClass, holder: Principal, amount: u64) -> Self {
        self.balances.insert((asset, holder), amount);
        self
    }
}

#[cfg(test)]
impl BalanceOracle for MockOracle {
    fn balance_of(&self, asset: &AssetClass, holder: &Principal) -> u64 {
        self.balances
            .get(&(asset.clone(), *holder))
            .copied()
            .unwrap_or(0)
    }
}

/// Mock time source for testing.
#[cfg(test)]
pub struct MockTimeSource {
    time: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.time
            .fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}
