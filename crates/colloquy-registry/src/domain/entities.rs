//! Core domain entities for the Registry subsystem.
//!
//! Defines the question record, the answer gate, and the value objects
//! carried across the inbound API.

// Re-export from shared-types for convenience
pub use shared_types::{AnswerId, AssetClass, Hash, Principal, QuestionId, Timestamp};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Balance gate on answer submission.
///
/// A gated question names a collection (checked for existence once, at
/// creation) and requires every answering principal to hold at least
/// `min_balance` of `asset_class` at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerGate {
    /// Principal that owns the gating collection.
    pub collection_owner: Principal,
    /// Name of the gating collection, opaque bytes.
    pub collection_name: Vec<u8>,
    /// Asset class the balance check is performed in.
    pub asset_class: AssetClass,
    /// Minimum balance an answering principal must hold.
    pub min_balance: u64,
}

/// Caller-supplied parameters for creating a question.
///
/// The seed feeds the deterministic identifier derivation together with
/// the creator principal; it is not stored on the resulting record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// Derivation seed; (creator, seed) determines the question id.
    pub seed: Vec<u8>,
    /// Opaque display fields, immutable after creation.
    pub title: String,
    /// Topic label.
    pub topic: String,
    /// Long-form body.
    pub description: String,
    /// Image URI.
    pub image: String,
    /// `Some` makes the question gated; `None` accepts any answer.
    pub gate: Option<AnswerGate>,
}

/// A question record.
///
/// Created once, mutated many times (answers, favorites), never deleted.
/// Counts are computed from the backing collections, so they can never
/// drift from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier derived from (creator, seed); unique across the store.
    pub id: QuestionId,
    /// Principal that created the question; immutable.
    pub creator: Principal,
    /// Display title; immutable.
    pub title: String,
    /// Topic label; immutable.
    pub topic: String,
    /// Long-form body; immutable.
    pub description: String,
    /// Image URI; immutable.
    pub image: String,
    /// Answer gate; immutable. `None` means ungated.
    pub gate: Option<AnswerGate>,
    /// Answer identifiers in submission order; append-only, unique.
    pub answer_ids: Vec<AnswerId>,
    /// Principals currently favoriting this question.
    pub favorited_by: BTreeSet<Principal>,
}

impl Question {
    /// Creates a new question from a draft with empty collections.
    #[must_use]
    pub fn new(id: QuestionId, creator: Principal, draft: QuestionDraft) -> Self {
        Self {
            id,
            creator,
            title: draft.title,
            topic: draft.topic,
            description: draft.description,
            image: draft.image,
            gate: draft.gate,
            answer_ids: Vec::new(),
            favorited_by: BTreeSet::new(),
        }
    }

    /// Returns true if answer submission is balance-gated.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        self.gate.is_some()
    }

    /// Number of answers submitted against this question.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answer_ids.len()
    }

    /// Number of principals currently favoriting this question.
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorited_by.len()
    }

    /// Returns true if the answer id is already recorded here.
    #[must_use]
    pub fn has_answer(&self, answer: &AnswerId) -> bool {
        self.answer_ids.contains(answer)
    }

    /// Returns true if the principal currently favorites this question.
    #[must_use]
    pub fn is_favorited_by(&self, principal: &Principal) -> bool {
        self.favorited_by.contains(principal)
    }
}

/// Aggregate counters snapshot for the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardStatus {
    /// Total questions on the board.
    pub questions: usize,
    /// Total answers across all questions.
    pub answers: usize,
    /// Total favorite memberships across all questions.
    pub favorites: usize,
    /// Total collect memberships across all answers.
    pub collects: usize,
}
