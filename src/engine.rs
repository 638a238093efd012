//! Question Engine Facade
//!
//! [`QuestionEngine`] owns the PRNG and the tuning config and dispatches to
//! the pure generator functions in [`crate::question`]. One engine serves
//! one player's sequential question loop; it holds no pool data and no
//! mastery state - both arrive per call in the [`ItemPools`] snapshot.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::question::{
    face, letter, word, FaceMatchQuestion, LetterHuntQuestion, LetterMatchQuestion,
    LetterToPictureQuestion, NameToFaceQuestion, PhonicsQuestion, PictureToLetterQuestion,
    SplatterRound, WordMatchQuestion,
};
use crate::types::{Difficulty, ItemPools, Stage, VocabularyItem};

pub struct QuestionEngine {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl QuestionEngine {
    /// Create an engine with default tuning and a time-derived seed.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an engine with a specific seed (for reproducible tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: EngineConfig::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==================== Letter Games ====================

    pub fn letter_match(&mut self, pools: &ItemPools) -> Result<LetterMatchQuestion, EngineError> {
        letter::generate_letter_match(&pools.letters, &mut self.rng)
    }

    pub fn letter_hunt(
        &mut self,
        pools: &ItemPools,
        difficulty: Difficulty,
    ) -> Result<LetterHuntQuestion, EngineError> {
        letter::generate_letter_hunt(
            &pools.letters,
            &self.config.letter_hunt,
            difficulty,
            &mut self.rng,
        )
    }

    pub fn letter_to_picture(
        &mut self,
        pools: &ItemPools,
    ) -> Result<LetterToPictureQuestion, EngineError> {
        letter::generate_letter_to_picture(&pools.letters, &pools.vocabulary, &mut self.rng)
    }

    pub fn picture_to_letter(
        &mut self,
        pools: &ItemPools,
    ) -> Result<PictureToLetterQuestion, EngineError> {
        letter::generate_picture_to_letter(&pools.letters, &pools.vocabulary, &mut self.rng)
    }

    // ==================== Word Games ====================

    pub fn starts_with(
        &mut self,
        pools: &ItemPools,
        stage: Stage,
    ) -> Result<PhonicsQuestion, EngineError> {
        word::generate_starts_with(&pools.vocabulary, stage, &mut self.rng)
    }

    pub fn ends_with(
        &mut self,
        pools: &ItemPools,
        stage: Stage,
    ) -> Result<PhonicsQuestion, EngineError> {
        word::generate_ends_with(&pools.vocabulary, stage, &mut self.rng)
    }

    pub fn word_match(&mut self, pools: &ItemPools) -> Result<WordMatchQuestion, EngineError> {
        word::generate_word_match(&pools.vocabulary, &mut self.rng)
    }

    pub fn picture_match(&mut self, pools: &ItemPools) -> Result<WordMatchQuestion, EngineError> {
        word::generate_picture_match(&pools.vocabulary, &mut self.rng)
    }

    pub fn splatter_round(
        &mut self,
        pools: &ItemPools,
        difficulty: Difficulty,
    ) -> Result<SplatterRound, EngineError> {
        word::generate_splatter_round(
            &pools.vocabulary,
            &self.config.splatter,
            difficulty,
            &mut self.rng,
        )
    }

    /// Next call-out from the surviving splatter pool.
    pub fn next_splatter_target<'a>(
        &mut self,
        remaining: &'a [VocabularyItem],
    ) -> Result<&'a VocabularyItem, EngineError> {
        word::next_splatter_target(remaining, &mut self.rng)
    }

    // ==================== Face Games ====================

    pub fn face_match(
        &mut self,
        pools: &ItemPools,
        difficulty: Difficulty,
    ) -> Option<FaceMatchQuestion> {
        face::generate_face_match(&pools.people, difficulty, &mut self.rng)
    }

    pub fn name_to_face(&mut self, pools: &ItemPools) -> Option<NameToFaceQuestion> {
        face::generate_name_to_face(&pools.people, &mut self.rng)
    }
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
