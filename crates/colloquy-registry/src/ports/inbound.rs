//! # Inbound Port - RegistryApi
//!
//! Primary driving port exposing the registry's mutation protocol and
//! its read path.
//!
//! The caller principal is never a parameter: every operation resolves
//! it through the `IdentityProvider` outbound port, so the transport
//! boundary is the single place where authentication happens.

use crate::domain::{
    AnswerId, BoardStatus, Principal, Question, QuestionDraft, QuestionId, RegistryError,
};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Primary API for the Registry subsystem.
///
/// Each mutation is atomic: it either fully applies and emits exactly
/// one notification, or fails with no observable state change. Failures
/// are immediate and final; callers resubmit if they want to retry.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Creates a new question owned by the caller.
    ///
    /// The question id is derived deterministically from the caller and
    /// `draft.seed`. If the draft carries a gate, the gating collection
    /// must exist at creation time; it is never re-validated afterwards.
    ///
    /// # Errors
    /// - `QuestionExists`: the derived id is already taken
    /// - `CollectionNotFound`: the draft is gated and the collection is
    ///   missing from the directory
    async fn ask_question(&self, draft: QuestionDraft) -> Result<QuestionId, RegistryError>;

    /// Submits an answer against an existing question.
    ///
    /// Answer ids are unique per question, not globally; a caller that
    /// reuses an id across questions aliases their collector sets.
    ///
    /// # Errors
    /// - `QuestionNotFound`: unknown question
    /// - `DuplicateAnswer`: the answer id is already on this question
    /// - `BalanceBelowMinimum`: the question is gated and the caller's
    ///   balance is strictly below the gate
    async fn submit_answer(
        &self,
        question: QuestionId,
        answer: AnswerId,
    ) -> Result<(), RegistryError>;

    /// Adds or removes the caller from a question's favorite set.
    ///
    /// # Errors
    /// - `QuestionNotFound`: unknown question
    /// - `AlreadyFavorited`: `favorite == true` and already a member
    /// - `NotFavorited`: `favorite == false` and not a member
    async fn toggle_favorite(
        &self,
        question: QuestionId,
        favorite: bool,
    ) -> Result<(), RegistryError>;

    /// Adds or removes the caller from an answer's collector set.
    ///
    /// # Errors
    /// - `QuestionNotFound`: unknown question
    /// - `AnswerNotFound`: the answer is not recorded on that question
    /// - `AlreadyCollected`: `collect == true` and already a member
    /// - `NotCollected`: `collect == false` and not a member
    async fn toggle_collect(
        &self,
        question: QuestionId,
        answer: AnswerId,
        collect: bool,
    ) -> Result<(), RegistryError>;

    /// Gets a question snapshot by id.
    async fn question(&self, id: QuestionId) -> Option<Question>;

    /// Gets the current collectors of an answer (empty if none).
    async fn collectors(&self, answer: AnswerId) -> BTreeSet<Principal>;

    /// Gets aggregate board counters.
    async fn status(&self) -> BoardStatus;
}
