//! # Invariant Sequences
//!
//! Cross-operation sequences asserting the registry's structural
//! guarantees: counts always derivable from collections, failed calls
//! mutate nothing, set-semantics on toggles, and the documented
//! answer-id aliasing across questions.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use colloquy_registry::adapters::publisher::NoOpPublisher;
use colloquy_registry::domain::{ErrorKind, RegistryError};
use colloquy_registry::ports::inbound::RegistryApi;
use colloquy_registry::service::RegistryService;

use crate::fixtures::{answer, draft, principal, FixedClock, StaticDirectory, SwitchboardIdentity, TableOracle};

type QuietService = RegistryService<
    Arc<SwitchboardIdentity>,
    StaticDirectory,
    TableOracle,
    Arc<FixedClock>,
    NoOpPublisher,
>;

struct Harness {
    identity: Arc<SwitchboardIdentity>,
    service: QuietService,
}

fn harness() -> Harness {
    let identity = Arc::new(SwitchboardIdentity::new(principal(0xA1)));
    let service = RegistryService::new(
        identity.clone(),
        StaticDirectory::new(),
        TableOracle::new(),
        Arc::new(FixedClock::new(1_700_000_000)),
        NoOpPublisher,
    );
    Harness { identity, service }
}

// =============================================================================
// COUNTER LOCKSTEP
// =============================================================================

#[tokio::test]
async fn test_counts_equal_collection_sizes_after_every_operation() {
    let h = harness();
    let mut rng = StdRng::seed_from_u64(7);

    let question = h.service.ask_question(draft(b"lockstep")).await.unwrap();

    for round in 0u8..40 {
        let actor = principal(rng.gen_range(1u8..=6));
        h.identity.set_caller(actor);

        // Interleave submissions and favorite toggles, accepting that
        // some calls are rejected; the invariant must hold either way.
        if round % 2 == 0 {
            let _ = h.service.submit_answer(question, answer(round)).await;
        } else {
            let flag = rng.gen_bool(0.5);
            let _ = h.service.toggle_favorite(question, flag).await;
        }

        let record = h.service.question(question).await.unwrap();
        assert_eq!(record.answer_count(), record.answer_ids.len());
        assert_eq!(record.favorite_count(), record.favorited_by.len());

        let status = h.service.status().await;
        assert_eq!(status.answers, record.answer_count());
        assert_eq!(status.favorites, record.favorite_count());
    }
}

// =============================================================================
// FAILED CALLS MUTATE NOTHING
// =============================================================================

#[tokio::test]
async fn test_failed_ask_leaves_store_unchanged() {
    let h = harness();

    let question = h.service.ask_question(draft(b"immutable")).await.unwrap();
    h.service.submit_answer(question, answer(1)).await.unwrap();
    h.service.toggle_favorite(question, true).await.unwrap();

    let before = h.service.question(question).await.unwrap();
    let status_before = h.service.status().await;

    let err = h.service.ask_question(draft(b"immutable")).await.unwrap_err();
    assert_eq!(err, RegistryError::QuestionExists(question));

    assert_eq!(h.service.question(question).await.unwrap(), before);
    assert_eq!(h.service.status().await, status_before);
}

#[tokio::test]
async fn test_failed_gated_submit_leaves_store_unchanged() {
    let identity = Arc::new(SwitchboardIdentity::new(principal(0xA1)));
    let service: QuietService = RegistryService::new(
        identity.clone(),
        StaticDirectory::new().with_collection(principal(0xCC), b"experts"),
        TableOracle::new(), // every balance is zero
        Arc::new(FixedClock::new(1_700_000_000)),
        NoOpPublisher,
    );

    let mut gated = draft(b"zero-balance");
    gated.gate = Some(colloquy_registry::domain::AnswerGate {
        collection_owner: principal(0xCC),
        collection_name: b"experts".to_vec(),
        asset_class: colloquy_registry::domain::AssetClass::new("colloquy:credit"),
        min_balance: 1,
    });
    let question = service.ask_question(gated).await.unwrap();

    let err = service.submit_answer(question, answer(1)).await.unwrap_err();

    assert_eq!(
        err,
        RegistryError::BalanceBelowMinimum {
            required: 1,
            available: 0,
        }
    );
    assert_eq!(service.question(question).await.unwrap().answer_count(), 0);
}

// =============================================================================
// TOGGLE SET-SEMANTICS
// =============================================================================

#[tokio::test]
async fn test_favorite_round_trip_restores_prior_count() {
    let h = harness();
    let question = h.service.ask_question(draft(b"toggles")).await.unwrap();

    h.identity.set_caller(principal(0xB2));
    h.service.toggle_favorite(question, true).await.unwrap();
    h.identity.set_caller(principal(0xC3));
    h.service.toggle_favorite(question, true).await.unwrap();
    let count_before = h.service.question(question).await.unwrap().favorite_count();

    h.service.toggle_favorite(question, false).await.unwrap();
    h.service.toggle_favorite(question, true).await.unwrap();

    assert_eq!(
        h.service.question(question).await.unwrap().favorite_count(),
        count_before
    );
}

#[tokio::test]
async fn test_double_toggles_fail_with_already_exists_kind() {
    let h = harness();
    let question = h.service.ask_question(draft(b"idempotence")).await.unwrap();
    h.service.submit_answer(question, answer(1)).await.unwrap();

    h.service.toggle_favorite(question, true).await.unwrap();
    let err = h.service.toggle_favorite(question, true).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    h.service
        .toggle_collect(question, answer(1), true)
        .await
        .unwrap();
    let err = h
        .service
        .toggle_collect(question, answer(1), true)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[tokio::test]
async fn test_removal_of_non_member_keeps_inverted_kind() {
    let h = harness();
    let question = h.service.ask_question(draft(b"inversion")).await.unwrap();
    h.service.submit_answer(question, answer(1)).await.unwrap();

    // Unfavorite and uncollect of a non-member both classify as
    // AlreadyExists; consumers dispatch on this historical mapping.
    let err = h.service.toggle_favorite(question, false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    let err = h
        .service
        .toggle_collect(question, answer(1), false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

// =============================================================================
// ANSWER-ID NAMESPACE
// =============================================================================

#[tokio::test]
async fn test_first_collect_on_fresh_answer_succeeds() {
    let h = harness();
    let question = h.service.ask_question(draft(b"fresh")).await.unwrap();
    h.service.submit_answer(question, answer(1)).await.unwrap();

    // No collect has happened yet; the index entry is created lazily
    assert!(h.service.collectors(answer(1)).await.is_empty());
    h.service
        .toggle_collect(question, answer(1), true)
        .await
        .unwrap();
    assert_eq!(h.service.collectors(answer(1)).await.len(), 1);
}

#[tokio::test]
async fn test_answer_id_reuse_aliases_collector_sets() {
    let h = harness();
    let first = h.service.ask_question(draft(b"first")).await.unwrap();
    let second = h.service.ask_question(draft(b"second")).await.unwrap();

    // Same answer id on both questions: legal, and deliberately aliased
    h.service.submit_answer(first, answer(9)).await.unwrap();
    h.service.submit_answer(second, answer(9)).await.unwrap();

    // Collect through the first question...
    h.service.toggle_collect(first, answer(9), true).await.unwrap();

    // ...then uncollect through the second: same underlying set
    h.service
        .toggle_collect(second, answer(9), false)
        .await
        .unwrap();

    assert!(h.service.collectors(answer(9)).await.is_empty());
}

#[tokio::test]
async fn test_collect_requires_answer_on_that_question() {
    let h = harness();
    let first = h.service.ask_question(draft(b"first")).await.unwrap();
    let second = h.service.ask_question(draft(b"second")).await.unwrap();
    h.service.submit_answer(first, answer(9)).await.unwrap();

    // The answer exists globally but not on the second question
    let err = h
        .service
        .toggle_collect(second, answer(9), true)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::AnswerNotFound {
            question: second,
            answer: answer(9),
        }
    );
}

// =============================================================================
// IDENTIFIER DERIVATION
// =============================================================================

#[tokio::test]
async fn test_question_ids_partition_by_caller_and_seed() {
    let h = harness();

    let a = h.service.ask_question(draft(b"seed-1")).await.unwrap();
    let b = h.service.ask_question(draft(b"seed-2")).await.unwrap();

    h.identity.set_caller(principal(0xB2));
    let c = h.service.ask_question(draft(b"seed-1")).await.unwrap();

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    assert_eq!(h.service.status().await.questions, 3);

    // Re-asking with an already-used (caller, seed) pair is rejected
    let err = h.service.ask_question(draft(b"seed-1")).await.unwrap_err();
    assert_eq!(err, RegistryError::QuestionExists(c));
}
