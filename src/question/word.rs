//! Word-Game Generators
//!
//! The two-stage phonics games (starts-with / ends-with), the word/picture
//! matching pair, and the depleting sight-word-splatter pool.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SplatterConfig;
use crate::error::EngineError;
use crate::mastery::select_weighted_random;
use crate::question::{CHOICE_DISTRACTORS, PHONICS_OPTIONS};
use crate::types::{Difficulty, GameVariant, Stage, VocabularyItem};

// ==================== Phonics (Starts-With / Ends-With) ====================

/// Which end of the word the round listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonicsPosition {
    Start,
    End,
}

impl PhonicsPosition {
    pub fn variant(&self) -> GameVariant {
        match self {
            Self::Start => GameVariant::StartsWith,
            Self::End => GameVariant::EndsWith,
        }
    }

    fn key_letter(&self, word: &VocabularyItem) -> Option<char> {
        match self {
            Self::Start => word.first_letter(),
            Self::End => word.last_letter(),
        }
    }
}

/// A starts-with or ends-with round.
///
/// `correct_indices` is a set: stage 1 holds at most one entry (zero when no
/// other word shares the sound - the round is then all-distractor), stage 2
/// holds `min(2, available)` entries and the player must select all of them
/// and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonicsQuestion {
    pub target: VocabularyItem,
    pub position: PhonicsPosition,
    pub stage: Stage,
    pub options: Vec<VocabularyItem>,
    pub correct_indices: Vec<usize>,
}

pub fn generate_starts_with<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    stage: Stage,
    rng: &mut R,
) -> Result<PhonicsQuestion, EngineError> {
    let target = select_weighted_random(vocabulary, GameVariant::StartsWith, rng)?;
    build_phonics(vocabulary, target, PhonicsPosition::Start, stage, rng)
}

pub fn generate_ends_with<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    stage: Stage,
    rng: &mut R,
) -> Result<PhonicsQuestion, EngineError> {
    let target = select_weighted_random(vocabulary, GameVariant::EndsWith, rng)?;
    build_phonics(vocabulary, target, PhonicsPosition::End, stage, rng)
}

fn build_phonics<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    target: &VocabularyItem,
    position: PhonicsPosition,
    stage: Stage,
    rng: &mut R,
) -> Result<PhonicsQuestion, EngineError> {
    let key = position.key_letter(target).ok_or_else(|| {
        EngineError::DataUnavailable(format!("word '{}' is empty", target.id))
    })?;

    let mut matching: Vec<&VocabularyItem> = vocabulary
        .iter()
        .filter(|w| w.id != target.id && position.key_letter(w) == Some(key))
        .collect();
    let mut distractors: Vec<&VocabularyItem> = vocabulary
        .iter()
        .filter(|w| w.id != target.id && position.key_letter(w) != Some(key))
        .collect();

    matching.shuffle(rng);
    matching.truncate(stage.match_quota());

    distractors.shuffle(rng);
    let fill = PHONICS_OPTIONS - matching.len();
    if distractors.len() < fill {
        tracing::warn!(
            target_id = %target.id,
            position = ?position,
            available = distractors.len(),
            needed = fill,
            "short on phonics distractors, serving a smaller round"
        );
    }
    distractors.truncate(fill);

    let mut options: Vec<VocabularyItem> = matching
        .into_iter()
        .chain(distractors)
        .cloned()
        .collect();
    options.shuffle(rng);

    let correct_indices: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, w)| position.key_letter(w) == Some(key))
        .map(|(i, _)| i)
        .collect();

    Ok(PhonicsQuestion {
        target: target.clone(),
        position,
        stage,
        options,
        correct_indices,
    })
}

// ==================== Word-Match / Picture-Match ====================

/// How the target is presented: spoken word or its picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordPrompt {
    Audio,
    Picture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatchQuestion {
    pub target: VocabularyItem,
    pub prompt: WordPrompt,
    pub options: Vec<VocabularyItem>,
    pub correct_index: usize,
}

pub fn generate_word_match<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    rng: &mut R,
) -> Result<WordMatchQuestion, EngineError> {
    let target = select_weighted_random(vocabulary, GameVariant::WordMatch, rng)?.clone();
    build_word_match(vocabulary, target, WordPrompt::Audio, rng)
}

/// Picture-prompted variant: the target and every option need an image.
pub fn generate_picture_match<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    rng: &mut R,
) -> Result<WordMatchQuestion, EngineError> {
    let pictured: Vec<&VocabularyItem> = vocabulary.iter().filter(|w| w.has_image()).collect();
    let target = (*select_weighted_random(&pictured, GameVariant::PictureMatch, rng)?).clone();
    let pool: Vec<VocabularyItem> = pictured.into_iter().cloned().collect();
    build_word_match(&pool, target, WordPrompt::Picture, rng)
}

fn build_word_match<R: Rng + ?Sized>(
    pool: &[VocabularyItem],
    target: VocabularyItem,
    prompt: WordPrompt,
    rng: &mut R,
) -> Result<WordMatchQuestion, EngineError> {
    let mut distractors: Vec<&VocabularyItem> =
        pool.iter().filter(|w| w.id != target.id).collect();
    distractors.shuffle(rng);
    if distractors.len() < CHOICE_DISTRACTORS {
        tracing::warn!(
            target_id = %target.id,
            available = distractors.len(),
            "short on word distractors, serving a smaller round"
        );
    }
    distractors.truncate(CHOICE_DISTRACTORS);

    let mut options: Vec<VocabularyItem> = distractors.into_iter().cloned().collect();
    options.push(target.clone());
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|w| w.id == target.id)
        .expect("target word is always present in options");

    Ok(WordMatchQuestion {
        target,
        prompt,
        options,
        correct_index,
    })
}

// ==================== Sight-Word-Splatter ====================

/// Initial splatter state: one shuffled pool that depletes across rounds as
/// the player clears targets, plus the first target to call out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplatterRound {
    pub target: VocabularyItem,
    pub difficulty: Difficulty,
    pub pool: Vec<VocabularyItem>,
}

pub fn generate_splatter_round<R: Rng + ?Sized>(
    vocabulary: &[VocabularyItem],
    config: &SplatterConfig,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<SplatterRound, EngineError> {
    let target = select_weighted_random(vocabulary, GameVariant::SightWordSplatter, rng)?;

    let mut distractors: Vec<&VocabularyItem> =
        vocabulary.iter().filter(|w| w.id != target.id).collect();
    distractors.shuffle(rng);
    let wanted = config.distractors(difficulty);
    if distractors.len() < wanted {
        tracing::warn!(
            target_id = %target.id,
            available = distractors.len(),
            wanted,
            "short on splatter distractors, serving a smaller pool"
        );
    }
    distractors.truncate(wanted);

    let mut pool: Vec<VocabularyItem> = distractors.into_iter().cloned().collect();
    pool.push(target.clone());
    pool.shuffle(rng);

    Ok(SplatterRound {
        target: target.clone(),
        difficulty,
        pool,
    })
}

/// Re-select the next call-out from whatever survives of the original pool.
/// Same weighting formula, same variant key - the pool depletes, it is not
/// re-dealt.
pub fn next_splatter_target<'a, R: Rng + ?Sized>(
    remaining: &'a [VocabularyItem],
    rng: &mut R,
) -> Result<&'a VocabularyItem, EngineError> {
    select_weighted_random(remaining, GameVariant::SightWordSplatter, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn animal_words() -> Vec<VocabularyItem> {
        // Several shared first letters (cat/cow/camel, dog/deer) and shared
        // last letters (cat/goat/rabbit, dog/frog).
        [
            "cat", "cow", "camel", "dog", "deer", "frog", "goat", "hen", "rabbit", "sheep",
        ]
        .iter()
        .enumerate()
        .map(|(i, w)| VocabularyItem::new(format!("word-{i}"), *w))
        .collect()
    }

    #[test]
    fn test_starts_with_stage_one_has_at_most_one_match() {
        let words = animal_words();
        let mut rng = ChaCha8Rng::seed_from_u64(51);

        for _ in 0..100 {
            let q = generate_starts_with(&words, Stage::One, &mut rng).expect("non-empty pool");
            assert!(q.correct_indices.len() <= 1);
            assert_eq!(q.options.len(), 4);
            assert!(q.options.iter().all(|w| w.id != q.target.id));

            let key = q.target.first_letter();
            for (i, option) in q.options.iter().enumerate() {
                let matches = option.first_letter() == key;
                assert_eq!(matches, q.correct_indices.contains(&i));
            }
        }
    }

    #[test]
    fn test_starts_with_stage_two_match_count() {
        let words = animal_words();
        let mut rng = ChaCha8Rng::seed_from_u64(52);

        for _ in 0..100 {
            let q = generate_starts_with(&words, Stage::Two, &mut rng).expect("non-empty pool");
            let key = q.target.first_letter();
            let available = words
                .iter()
                .filter(|w| w.id != q.target.id && w.first_letter() == key)
                .count();
            assert_eq!(q.correct_indices.len(), available.min(2));
        }
    }

    #[test]
    fn test_ends_with_no_matching_words_yields_all_distractors() {
        // No other word ends in 't': the matching branch is empty and the
        // round is served entirely from distractors.
        let words = vec![
            VocabularyItem::new("1", "cat"),
            VocabularyItem::new("2", "cow"),
            VocabularyItem::new("3", "dog"),
        ];
        let cat = &words[0];
        let mut rng = ChaCha8Rng::seed_from_u64(53);

        let q = build_phonics(&words, cat, PhonicsPosition::End, Stage::One, &mut rng)
            .expect("target word is non-empty");
        assert!(q.correct_indices.is_empty());
        assert!(!q.options.is_empty());
        for option in &q.options {
            assert_ne!(option.last_letter(), Some('t'));
            assert_ne!(option.id, cat.id);
        }
    }

    #[test]
    fn test_word_match_shape() {
        let words = animal_words();
        let mut rng = ChaCha8Rng::seed_from_u64(54);

        for _ in 0..50 {
            let q = generate_word_match(&words, &mut rng).expect("non-empty pool");
            assert_eq!(q.prompt, WordPrompt::Audio);
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.options[q.correct_index].id, q.target.id);

            let unique: std::collections::HashSet<&str> =
                q.options.iter().map(|w| w.id.as_str()).collect();
            assert_eq!(unique.len(), 4, "options must not repeat words");
        }
    }

    #[test]
    fn test_picture_match_only_serves_pictured_words() {
        let mut words = animal_words();
        for word in words.iter_mut().take(5) {
            word.image_url = Some(format!("{}.png", word.word));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(55);

        for _ in 0..50 {
            let q = generate_picture_match(&words, &mut rng).expect("pictured words exist");
            assert_eq!(q.prompt, WordPrompt::Picture);
            assert!(q.target.has_image());
            assert!(q.options.iter().all(VocabularyItem::has_image));
        }
    }

    #[test]
    fn test_splatter_pool_shape_and_depletion() {
        let words = animal_words();
        let config = SplatterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(56);

        let round = generate_splatter_round(&words, &config, Difficulty::Easy, &mut rng)
            .expect("non-empty pool");
        assert_eq!(round.pool.len(), 5, "target plus four distractors");
        assert!(round.pool.iter().any(|w| w.id == round.target.id));

        // Clear the first target and re-select from the survivors only.
        let mut remaining = round.pool.clone();
        remaining.retain(|w| w.id != round.target.id);
        let next = next_splatter_target(&remaining, &mut rng).expect("pool not yet empty");
        assert!(remaining.iter().any(|w| w.id == next.id));

        let empty: Vec<VocabularyItem> = vec![];
        assert!(matches!(
            next_splatter_target(&empty, &mut rng),
            Err(EngineError::EmptyPool(_))
        ));
    }
}
