//! # Registry Service
//!
//! Application service layer that implements the `RegistryApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RegistryApi`)
//! - Uses the outbound ports (`IdentityProvider`, `CollectionDirectory`,
//!   `BalanceOracle`, `TimeSource`) for external lookups
//! - Delegates structural mutation to the domain board
//! - Emits one notification per completed mutation
//!
//! ## Atomicity
//!
//! The board is guarded by a single async mutex held for the full
//! check → mutate → emit span of each operation. Operations are
//! therefore totally ordered: no partial mutation is ever observable,
//! and notifications leave in exactly the order mutations applied.

use crate::adapters::publisher::RegistryEventPublisher;
use crate::domain::{
    AnswerId, BoardStatus, Principal, Question, QuestionBoard, QuestionDraft, QuestionId,
    RegistryError,
};
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::{BalanceOracle, CollectionDirectory, IdentityProvider, TimeSource};
use async_trait::async_trait;
use shared_bus::events::RegistryEvent;
use std::collections::BTreeSet;
use tokio::sync::Mutex;
use tracing::warn;

/// Registry application service.
///
/// Generic over the outbound capability ports and the notification
/// publisher so that transports, lookups, and delivery can be swapped
/// without touching the mutation protocol.
pub struct RegistryService<I, D, O, T, P> {
    identity: I,
    directory: D,
    oracle: O,
    clock: T,
    publisher: P,
    board: Mutex<QuestionBoard>,
}

impl<I, D, O, T, P> RegistryService<I, D, O, T, P>
where
    I: IdentityProvider,
    D: CollectionDirectory,
    O: BalanceOracle,
    T: TimeSource,
    P: RegistryEventPublisher,
{
    /// Creates a new registry service with an empty board.
    pub fn new(identity: I, directory: D, oracle: O, clock: T, publisher: P) -> Self {
        Self {
            identity,
            directory,
            oracle,
            clock,
            publisher,
            board: Mutex::new(QuestionBoard::new()),
        }
    }

    /// Hands a notification to the sink.
    ///
    /// The sink is fire-and-forget: a delivery failure is logged and the
    /// operation that produced the event still succeeds.
    async fn emit(&self, event: RegistryEvent) {
        if let Err(e) = self.publisher.publish(event).await {
            warn!(error = %e, "Notification dropped");
        }
    }
}

#[async_trait]
impl<I, D, O, T, P> RegistryApi for RegistryService<I, D, O, T, P>
where
    I: IdentityProvider,
    D: CollectionDirectory,
    O: BalanceOracle,
    T: TimeSource,
    P: RegistryEventPublisher,
{
    async fn ask_question(&self, draft: QuestionDraft) -> Result<QuestionId, RegistryError> {
        let caller = self.identity.resolve_caller();
        let id = self.identity.derive_question_id(&caller, &draft.seed);

        let mut board = self.board.lock().await;

        if board.contains(&id) {
            return Err(RegistryError::QuestionExists(id));
        }

        // Gate validity is checked at creation only; a collection removed
        // later does not invalidate existing questions.
        if let Some(gate) = &draft.gate {
            if !self
                .directory
                .exists(&gate.collection_owner, &gate.collection_name)
            {
                return Err(RegistryError::CollectionNotFound {
                    owner: gate.collection_owner,
                    name: gate.collection_name.clone(),
                });
            }
        }

        board.insert_question(Question::new(id, caller, draft))?;

        self.emit(RegistryEvent::QuestionCreated {
            question: id,
            creator: caller,
            at: self.clock.now(),
        })
        .await;

        Ok(id)
    }

    async fn submit_answer(
        &self,
        question: QuestionId,
        answer: AnswerId,
    ) -> Result<(), RegistryError> {
        let caller = self.identity.resolve_caller();

        let mut board = self.board.lock().await;

        let record = board
            .question(&question)
            .ok_or(RegistryError::QuestionNotFound(question))?;

        if record.has_answer(&answer) {
            return Err(RegistryError::DuplicateAnswer { question, answer });
        }

        if let Some(gate) = &record.gate {
            let available = self.oracle.balance_of(&gate.asset_class, &caller);
            // Rejects only when the balance is strictly below the gate.
            if gate.min_balance > available {
                return Err(RegistryError::BalanceBelowMinimum {
                    required: gate.min_balance,
                    available,
                });
            }
        }

        board.record_answer(&question, answer)?;

        self.emit(RegistryEvent::AnswerSubmitted {
            question,
            answer,
            author: caller,
            at: self.clock.now(),
        })
        .await;

        Ok(())
    }

    async fn toggle_favorite(
        &self,
        question: QuestionId,
        favorite: bool,
    ) -> Result<(), RegistryError> {
        let caller = self.identity.resolve_caller();

        let mut board = self.board.lock().await;

        board.set_favorite(&question, caller, favorite)?;

        self.emit(RegistryEvent::FavoriteToggled {
            question,
            favorited: favorite,
            principal: caller,
            at: self.clock.now(),
        })
        .await;

        Ok(())
    }

    async fn toggle_collect(
        &self,
        question: QuestionId,
        answer: AnswerId,
        collect: bool,
    ) -> Result<(), RegistryError> {
        let caller = self.identity.resolve_caller();

        let mut board = self.board.lock().await;

        board.set_collected(&question, &answer, caller, collect)?;

        self.emit(RegistryEvent::CollectToggled {
            question,
            answer,
            collected: collect,
            principal: caller,
            at: self.clock.now(),
        })
        .await;

        Ok(())
    }

    async fn question(&self, id: QuestionId) -> Option<Question> {
        self.board.lock().await.question(&id).cloned()
    }

    async fn collectors(&self, answer: AnswerId) -> BTreeSet<Principal> {
        self.board
            .lock()
            .await
            .collectors(&answer)
            .cloned()
            .unwrap_or_default()
    }

    async fn status(&self) -> BoardStatus {
        self.board.lock().await.status()
    }
}
