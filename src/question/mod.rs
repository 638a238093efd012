//! Question Generators
//!
//! One pure generator per practice-game variant. Shared contract:
//!
//! - read an immutable pool snapshot; never mutate it
//! - sample the target with the variant's own mastery key
//! - Fisher-Yates shuffle `options` before computing correctness indices,
//!   so rendered position carries no bias
//! - fail with [`crate::EngineError`] when no structurally valid question
//!   exists; the face games return `None` for their expected empty state
//!
//! The stateful [`crate::QuestionEngine`] facade wraps these with an owned
//! rng and config.

pub mod face;
pub mod letter;
pub mod word;

pub use face::{generate_face_match, generate_name_to_face, FaceMatchQuestion, NameToFaceQuestion};
pub use letter::{
    generate_letter_hunt, generate_letter_match, generate_letter_to_picture,
    generate_picture_to_letter, LetterHuntQuestion, LetterMatchQuestion, LetterToPictureQuestion,
    PictureToLetterQuestion,
};
pub use word::{
    generate_ends_with, generate_picture_match, generate_splatter_round, generate_starts_with,
    generate_word_match, next_splatter_target, PhonicsPosition, PhonicsQuestion, SplatterRound,
    WordMatchQuestion, WordPrompt,
};

/// Distractors accompanying the single correct option in 4-option rounds
pub(crate) const CHOICE_DISTRACTORS: usize = 3;

/// Options per phonics round
pub(crate) const PHONICS_OPTIONS: usize = 4;

/// Name distractors accompanying the target in the face games
pub(crate) const FACE_DISTRACTORS: usize = 3;
