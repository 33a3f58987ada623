//! Registry error types.
//!
//! Defines all error conditions for the Registry subsystem, each
//! classified into one of three caller-visible kinds.

use super::entities::{AnswerId, Principal, QuestionId};

/// Coarse classification of a registry failure.
///
/// This is the surface external callers dispatch on; the variants of
/// `RegistryError` carry the diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Duplicate identifier or membership.
    AlreadyExists,
    /// Missing question, answer reference, or gating collection.
    NotFound,
    /// A balance gate rejected the call.
    PreconditionFailed,
}

/// Registry error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A question with this derived id already exists.
    QuestionExists(QuestionId),

    /// The answer id is already recorded on this question.
    DuplicateAnswer {
        question: QuestionId,
        answer: AnswerId,
    },

    /// The principal already favorites this question.
    AlreadyFavorited {
        question: QuestionId,
        principal: Principal,
    },

    /// Unfavorite requested but the principal is not a favoriter.
    NotFavorited {
        question: QuestionId,
        principal: Principal,
    },

    /// The principal already collects this answer.
    AlreadyCollected {
        answer: AnswerId,
        principal: Principal,
    },

    /// Uncollect requested but the principal is not a collector.
    NotCollected {
        answer: AnswerId,
        principal: Principal,
    },

    /// No question with this id.
    QuestionNotFound(QuestionId),

    /// The answer id is not among the question's answers.
    AnswerNotFound {
        question: QuestionId,
        answer: AnswerId,
    },

    /// The gating collection does not exist in the directory.
    CollectionNotFound {
        owner: Principal,
        name: Vec<u8>,
    },

    /// The caller's balance is strictly below the question's gate.
    BalanceBelowMinimum { required: u64, available: u64 },
}

impl RegistryError {
    /// The caller-visible kind of this error.
    ///
    /// `NotFavorited` and `NotCollected` classify as `AlreadyExists`:
    /// external consumers dispatch on this exact historical mapping, so
    /// the removal-of-a-non-member paths keep the inverted code.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::QuestionExists(_)
            | Self::DuplicateAnswer { .. }
            | Self::AlreadyFavorited { .. }
            | Self::NotFavorited { .. }
            | Self::AlreadyCollected { .. }
            | Self::NotCollected { .. } => ErrorKind::AlreadyExists,
            Self::QuestionNotFound(_)
            | Self::AnswerNotFound { .. }
            | Self::CollectionNotFound { .. } => ErrorKind::NotFound,
            Self::BalanceBelowMinimum { .. } => ErrorKind::PreconditionFailed,
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuestionExists(id) => {
                write!(f, "Question already exists: {:?}", &id[..4])
            }
            Self::DuplicateAnswer { question, answer } => {
                write!(
                    f,
                    "Answer {:?} already recorded on question {:?}",
                    &answer[..4],
                    &question[..4]
                )
            }
            Self::AlreadyFavorited {
                question,
                principal,
            } => {
                write!(
                    f,
                    "{} already favorites question {:?}",
                    principal,
                    &question[..4]
                )
            }
            Self::NotFavorited {
                question,
                principal,
            } => {
                write!(
                    f,
                    "{} does not favorite question {:?}",
                    principal,
                    &question[..4]
                )
            }
            Self::AlreadyCollected { answer, principal } => {
                write!(
                    f,
                    "{} already collects answer {:?}",
                    principal,
                    &answer[..4]
                )
            }
            Self::NotCollected { answer, principal } => {
                write!(
                    f,
                    "{} does not collect answer {:?}",
                    principal,
                    &answer[..4]
                )
            }
            Self::QuestionNotFound(id) => {
                write!(f, "Question not found: {:?}", &id[..4])
            }
            Self::AnswerNotFound { question, answer } => {
                write!(
                    f,
                    "Answer {:?} not found on question {:?}",
                    &answer[..4],
                    &question[..4]
                )
            }
            Self::CollectionNotFound { owner, name } => {
                write!(
                    f,
                    "Collection {:?} owned by {} not found",
                    String::from_utf8_lossy(name),
                    owner
                )
            }
            Self::BalanceBelowMinimum {
                required,
                available,
            } => {
                write!(
                    f,
                    "Balance below minimum: required {}, available {}",
                    required, available
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}
