//! # Question Board - Keyed Store and Collected-Answer Index
//!
//! Implements the core registry data structure.
//!
//! ## Data Structures
//!
//! - `questions`: O(1) lookup by question id
//! - `collected`: global collected-answer index, answer id → collectors
//!
//! ## Invariants Enforced
//!
//! - Question ids are unique across the store (checked in `insert_question`)
//! - Answer ids are unique within a question (checked in `record_answer`)
//! - Favorite and collect memberships are set-semantics (`BTreeSet`)
//! - Every mutating method is check-then-mutate: an error implies zero
//!   state change

use super::entities::{AnswerId, BoardStatus, Principal, Question, QuestionId};
use super::errors::RegistryError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The registry's keyed store.
///
/// Pure and synchronous; gating and identity concerns live in the
/// service layer. The collected-answer index is keyed by answer id
/// alone, independent of questions: reusing an answer id across two
/// questions aliases their collector sets, and callers that need global
/// uniqueness must enforce it themselves.
#[derive(Debug, Default)]
pub struct QuestionBoard {
    /// All questions indexed by id.
    questions: HashMap<QuestionId, Question>,

    /// Collected-answer index: answer id → principals collecting it.
    /// Entries are created lazily on first successful collect.
    collected: HashMap<AnswerId, BTreeSet<Principal>>,
}

impl QuestionBoard {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of questions on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the board holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks if a question exists.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions.contains_key(id)
    }

    /// Gets a question by id.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    /// Gets the collectors of an answer, if the index entry exists.
    ///
    /// `None` means no collect has ever succeeded for this answer id;
    /// an empty set means every collector has since uncollected.
    #[must_use]
    pub fn collectors(&self, answer: &AnswerId) -> Option<&BTreeSet<Principal>> {
        self.collected.get(answer)
    }

    /// Aggregate counters across the whole board.
    #[must_use]
    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            questions: self.questions.len(),
            answers: self.questions.values().map(Question::answer_count).sum(),
            favorites: self.questions.values().map(Question::favorite_count).sum(),
            collects: self.collected.values().map(BTreeSet::len).sum(),
        }
    }

    /// Inserts a new question.
    ///
    /// # Errors
    /// - `QuestionExists` if the id is already a key
    pub fn insert_question(&mut self, question: Question) -> Result<(), RegistryError> {
        if self.questions.contains_key(&question.id) {
            return Err(RegistryError::QuestionExists(question.id));
        }
        self.questions.insert(question.id, question);
        Ok(())
    }

    /// Appends an answer id to a question.
    ///
    /// Does not touch the collected-answer index; that entry is created
    /// lazily by the first successful collect.
    ///
    /// # Errors
    /// - `QuestionNotFound` if the question is unknown
    /// - `DuplicateAnswer` if the answer id is already recorded on it
    pub fn record_answer(
        &mut self,
        question: &QuestionId,
        answer: AnswerId,
    ) -> Result<(), RegistryError> {
        let record = self
            .questions
            .get_mut(question)
            .ok_or(RegistryError::QuestionNotFound(*question))?;

        if record.answer_ids.contains(&answer) {
            return Err(RegistryError::DuplicateAnswer {
                question: *question,
                answer,
            });
        }

        record.answer_ids.push(answer);
        Ok(())
    }

    /// Adds or removes a principal from a question's favorite set.
    ///
    /// # Errors
    /// - `QuestionNotFound` if the question is unknown
    /// - `AlreadyFavorited` on `favorite == true` for a current member
    /// - `NotFavorited` on `favorite == false` for a non-member
    pub fn set_favorite(
        &mut self,
        question: &QuestionId,
        principal: Principal,
        favorite: bool,
    ) -> Result<(), RegistryError> {
        let record = self
            .questions
            .get_mut(question)
            .ok_or(RegistryError::QuestionNotFound(*question))?;

        if favorite {
            if !record.favorited_by.insert(principal) {
                return Err(RegistryError::AlreadyFavorited {
                    question: *question,
                    principal,
                });
            }
        } else if !record.favorited_by.remove(&principal) {
            return Err(RegistryError::NotFavorited {
                question: *question,
                principal,
            });
        }

        Ok(())
    }

    /// Adds or removes a principal from an answer's collector set.
    ///
    /// The index entry for the answer id is created lazily on the first
    /// successful collect; an uncollect against a missing entry fails
    /// the same way it would against an empty set.
    ///
    /// # Errors
    /// - `QuestionNotFound` if the question is unknown
    /// - `AnswerNotFound` if the answer is not recorded on that question
    /// - `AlreadyCollected` on `collect == true` for a current member
    /// - `NotCollected` on `collect == false` for a non-member
    pub fn set_collected(
        &mut self,
        question: &QuestionId,
        answer: &AnswerId,
        principal: Principal,
        collect: bool,
    ) -> Result<(), RegistryError> {
        let record = self
            .questions
            .get(question)
            .ok_or(RegistryError::QuestionNotFound(*question))?;

        if !record.has_answer(answer) {
            return Err(RegistryError::AnswerNotFound {
                question: *question,
                answer: *answer,
            });
        }

        if collect {
            let members = self.collected.entry(*answer).or_default();
            if !members.insert(principal) {
                return Err(RegistryError::AlreadyCollected {
                    answer: *answer,
                    principal,
                });
            }
        } else {
            // No entry is created on the failure path: a fresh answer id
            // stays absent from the index until a collect succeeds.
            let removed = self
                .collected
                .get_mut(answer)
                .is_some_and(|members| members.remove(&principal));
            if !removed {
                return Err(RegistryError::NotCollected {
                    answer: *answer,
                    principal,
                });
            }
        }

        Ok(())
    }

    /// All collector sets, for status and inspection.
    #[must_use]
    pub fn collected_index(&self) -> BTreeMap<AnswerId, BTreeSet<Principal>> {
        self.collected
            .iter()
            .map(|(answer, members)| (*answer, members.clone()))
            .collect()
    }
}
