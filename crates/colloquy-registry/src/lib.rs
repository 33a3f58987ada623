//! # Question Registry Subsystem
//!
//! Single-writer, multi-reader registry for questions, threaded answers,
//! favorites, and curated ("collected") answers. Every completed
//! mutation is additionally emitted as an immutable notification on the
//! shared bus for external observers.
//!
//! ## Purpose
//!
//! Owns the question/answer/favorite/collect state and its mutation
//! protocol: unique identities, consistent counters, and idempotent
//! toggles across callers acting on shared records. Identity
//! resolution, collection existence, balances, and timestamps come from
//! external collaborators behind outbound ports.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Question ids unique across the store | `domain/board.rs` - `insert_question()` check |
//! | Answer ids unique within a question | `domain/board.rs` - `record_answer()` check |
//! | Favorite/collect membership is set-semantics | `BTreeSet` insert/remove results |
//! | Counts always equal backing collection sizes | computed accessors, no stored counters |
//! | Failed operations mutate nothing | check-then-mutate ordering throughout |
//! | One notification per completed mutation | `service.rs` - emit under the board lock |
//!
//! ## Mutation Protocol
//!
//! Every operation runs the same five steps under one board lock:
//!
//! ```text
//! resolve caller ──→ locate target ──→ external preconditions ──→ mutate ──→ emit
//! ```
//!
//! A failure at any step is immediate and final for that call; the
//! caller resubmits if it wants to retry. There is no background
//! processing, no scheduler, and no polling loop.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - SHA-256 identity, event publishers, bus bridge     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - RegistryApi trait                          │
//! │  ports/outbound.rs - IdentityProvider, CollectionDirectory,     │
//! │                      BalanceOracle, TimeSource traits           │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs - Question, AnswerGate, QuestionDraft       │
//! │  domain/board.rs    - QuestionBoard + collected-answer index    │
//! │  domain/errors.rs   - RegistryError enum + kind classification  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Asymmetries (kept deliberately)
//!
//! - Answer ids are unique per question, not globally; the
//!   collected-answer index is keyed by answer id alone, so reusing an
//!   id across questions aliases the collector sets.
//! - Removing a non-member (unfavorite/uncollect) classifies as
//!   `ErrorKind::AlreadyExists`; external consumers dispatch on that
//!   historical mapping.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use service::RegistryService;
