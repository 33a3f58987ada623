//! # Registry Events
//!
//! Defines the notification records that flow through the shared bus.
//! One variant per registry mutation; each carries exactly the
//! identifiers of the mutation that produced it, the toggle direction
//! where applicable, the acting principal, and an externally sourced
//! timestamp.

use serde::{Deserialize, Serialize};
use shared_types::entities::{AnswerId, Principal, QuestionId, Timestamp};

/// All notifications that can be published to the event bus.
///
/// Events are pure projections of a completed mutation's parameters:
/// they are emitted after the mutation applies and are never read back
/// by the registry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new question was created.
    QuestionCreated {
        /// Identifier of the new question.
        question: QuestionId,
        /// Principal that created it.
        creator: Principal,
        /// Creation time (seconds since the UNIX epoch).
        at: Timestamp,
    },

    /// An answer was submitted against an existing question.
    AnswerSubmitted {
        /// The question answered.
        question: QuestionId,
        /// Identifier of the new answer.
        answer: AnswerId,
        /// Principal that submitted it.
        author: Principal,
        /// Submission time.
        at: Timestamp,
    },

    /// A principal favorited or unfavorited a question.
    FavoriteToggled {
        /// The question affected.
        question: QuestionId,
        /// `true` for favorite, `false` for unfavorite.
        favorited: bool,
        /// Principal whose favorite membership changed.
        principal: Principal,
        /// Toggle time.
        at: Timestamp,
    },

    /// A principal collected or uncollected an answer.
    CollectToggled {
        /// The question the answer belongs to.
        question: QuestionId,
        /// The answer affected.
        answer: AnswerId,
        /// `true` for collect, `false` for uncollect.
        collected: bool,
        /// Principal whose curation membership changed.
        principal: Principal,
        /// Toggle time.
        at: Timestamp,
    },
}

impl RegistryEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::QuestionCreated { .. } => EventTopic::Questions,
            Self::AnswerSubmitted { .. } => EventTopic::Answers,
            Self::FavoriteToggled { .. } => EventTopic::Favorites,
            Self::CollectToggled { .. } => EventTopic::Collects,
        }
    }

    /// Get the principal that performed the mutation.
    #[must_use]
    pub fn principal(&self) -> Principal {
        match self {
            Self::QuestionCreated { creator, .. } => *creator,
            Self::AnswerSubmitted { author, .. } => *author,
            Self::FavoriteToggled { principal, .. } | Self::CollectToggled { principal, .. } => {
                *principal
            }
        }
    }

    /// Get the question the mutation targeted.
    #[must_use]
    pub fn question(&self) -> QuestionId {
        match self {
            Self::QuestionCreated { question, .. }
            | Self::AnswerSubmitted { question, .. }
            | Self::FavoriteToggled { question, .. }
            | Self::CollectToggled { question, .. } => *question,
        }
    }

    /// Get the externally sourced timestamp.
    #[must_use]
    pub fn at(&self) -> Timestamp {
        match self {
            Self::QuestionCreated { at, .. }
            | Self::AnswerSubmitted { at, .. }
            | Self::FavoriteToggled { at, .. }
            | Self::CollectToggled { at, .. } => *at,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Question creation events.
    Questions,
    /// Answer submission events.
    Answers,
    /// Favorite toggle events.
    Favorites,
    /// Collect toggle events.
    Collects,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Acting principals to include. Empty means all principals.
    pub principals: Vec<Principal>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            principals: Vec::new(),
        }
    }

    /// Create a filter for events performed by specific principals.
    #[must_use]
    pub fn from_principals(principals: Vec<Principal>) -> Self {
        Self {
            topics: Vec::new(),
            principals,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &RegistryEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let principal_match =
            self.principals.is_empty() || self.principals.contains(&event.principal());

        topic_match && principal_match
    }
}
