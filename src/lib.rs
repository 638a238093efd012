//! # lexikid-algo - literacy practice question engine
//!
//! Pure Rust core of the LexiKid literacy app: given pools of practice
//! items (letters, vocabulary words, family members), each carrying a
//! per-item per-game mastery history, this crate decides what to ask next
//! and builds a well-formed question for each of the eleven practice games.
//!
//! Design goals:
//!
//! - **Pure core** - generators read an injected pool snapshot and an
//!   injected PRNG; no globals, no I/O, no async
//! - **Adaptive** - weighted sampling keeps struggling and unseen items in
//!   front of the child while mastered items decay to a refresher tail
//! - **Well-formed by construction** - every round is shuffled before its
//!   correctness indices are computed, so position carries no signal
//! - **Fully tested** - unit suites per module plus statistical and
//!   property-based integration tests
//!
//! Module map:
//!
//! - [`mastery`] - attempts/correct records, the weight formula, and the
//!   weighted sampler
//! - [`question`] - one generator per game variant
//! - [`distractor`] - letter clusters, curated name pools, typo mutations
//! - [`engine`] - the stateful [`QuestionEngine`] facade (rng + config)
//! - [`config`] - difficulty tuning knobs
//! - [`types`] - items, pools, variant/difficulty/stage keys
//! - [`error`] - the engine error type
//!
//! Quick start:
//!
//! ```rust
//! use lexikid_algo::{ItemPools, LetterItem, QuestionEngine};
//!
//! let mut pools = ItemPools::new();
//! for c in 'a'..='z' {
//!     pools.letters.push(LetterItem::new(format!("letter-{c}"), c));
//! }
//!
//! let mut engine = QuestionEngine::with_seed(7);
//! let question = engine.letter_match(&pools).unwrap();
//! assert_eq!(question.options.len(), 4);
//!
//! // After the child answers, fold the outcome back into the pool before
//! // asking for the next question.
//! use lexikid_algo::GameVariant;
//! let target_id = question.target.id.clone();
//! let item = pools.letters.iter_mut().find(|l| l.id == target_id).unwrap();
//! item.apply_outcome(GameVariant::LetterMatch, true);
//! ```

pub mod config;
pub mod distractor;
pub mod engine;
pub mod error;
pub mod mastery;
pub mod question;
pub mod types;

pub use config::{EngineConfig, GridSpec, LetterHuntConfig, SplatterConfig};
pub use engine::QuestionEngine;
pub use error::EngineError;

pub use mastery::{
    calculate_weight, select_weighted_random, update_mastery, MasteryRecord, NEW_ITEM_WEIGHT,
};

pub use distractor::{
    confusable_cluster, generate_typos, get_random_distractors, DistractorOptions,
    DistractorStrategy, CONFUSABLE_CLUSTERS,
};

pub use question::{
    FaceMatchQuestion, LetterHuntQuestion, LetterMatchQuestion, LetterToPictureQuestion,
    NameToFaceQuestion, PhonicsPosition, PhonicsQuestion, PictureToLetterQuestion, SplatterRound,
    WordMatchQuestion, WordPrompt,
};

pub use types::{
    Difficulty, GameVariant, ItemPools, LetterItem, MasteryMap, PersonItem, PracticeItem, Stage,
    VocabularyItem,
};
