//! Letter-Game Generators
//!
//! letter-match, letter-hunt, and the two letter/picture bridging games.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::LetterHuntConfig;
use crate::distractor::letters::{confusable_cluster, random_letters_excluding};
use crate::error::EngineError;
use crate::mastery::select_weighted_random;
use crate::question::CHOICE_DISTRACTORS;
use crate::types::{Difficulty, GameVariant, LetterItem, VocabularyItem};

// ==================== Letter-Match ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterMatchQuestion {
    pub target: LetterItem,
    pub options: Vec<char>,
    pub correct_index: usize,
}

/// Pick a letter and build its 4-option round. A target inside a visually
/// confusable cluster is always served with exactly that cluster.
pub fn generate_letter_match<R: Rng + ?Sized>(
    letters: &[LetterItem],
    rng: &mut R,
) -> Result<LetterMatchQuestion, EngineError> {
    let target = select_weighted_random(letters, GameVariant::LetterMatch, rng)?;
    let target_letter = target.letter.to_ascii_lowercase();

    let mut options: Vec<char> = match confusable_cluster(target_letter) {
        Some(cluster) => cluster.to_vec(),
        None => {
            let mut opts = vec![target_letter];
            opts.extend(random_letters_excluding(
                &[target_letter],
                CHOICE_DISTRACTORS,
                rng,
            ));
            opts
        }
    };

    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|&c| c == target_letter)
        .expect("target letter is always present in its own option set");

    Ok(LetterMatchQuestion {
        target: target.clone(),
        options,
        correct_index,
    })
}

// ==================== Letter-Hunt ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterHuntQuestion {
    pub target: LetterItem,
    pub difficulty: Difficulty,
    /// Shuffled grid; correctness is multi-cell, so there is no single index
    pub grid: Vec<char>,
    /// Exact occurrences of the target letter in `grid`
    pub target_count: usize,
}

pub fn generate_letter_hunt<R: Rng + ?Sized>(
    letters: &[LetterItem],
    config: &LetterHuntConfig,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<LetterHuntQuestion, EngineError> {
    let target = select_weighted_random(letters, GameVariant::LetterHunt, rng)?;
    let spec = config.grid(difficulty);
    let target_letter = target.letter.to_ascii_lowercase();

    // Fillers exclude the target so the advertised count stays exact.
    let fillers: Vec<char> = ('a'..='z').filter(|&c| c != target_letter).collect();
    let mut grid = vec![target_letter; spec.target_count];
    while grid.len() < spec.total {
        grid.push(fillers[rng.gen_range(0..fillers.len())]);
    }
    grid.shuffle(rng);

    Ok(LetterHuntQuestion {
        target: target.clone(),
        difficulty,
        grid,
        target_count: spec.target_count,
    })
}

// ==================== Letter-to-Picture ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterToPictureQuestion {
    pub target: LetterItem,
    pub options: Vec<VocabularyItem>,
    pub correct_index: usize,
}

/// Sample a letter, then ask for the picture whose word starts with it.
pub fn generate_letter_to_picture<R: Rng + ?Sized>(
    letters: &[LetterItem],
    vocabulary: &[VocabularyItem],
    rng: &mut R,
) -> Result<LetterToPictureQuestion, EngineError> {
    let target = select_weighted_random(letters, GameVariant::LetterToPicture, rng)?;
    let target_letter = target.letter.to_ascii_lowercase();

    let correct = vocabulary
        .iter()
        .find(|w| w.first_letter() == Some(target_letter))
        .ok_or_else(|| {
            EngineError::DataUnavailable(format!("no word starts with '{target_letter}'"))
        })?;

    let mut distractors: Vec<&VocabularyItem> = vocabulary
        .iter()
        .filter(|w| w.id != correct.id && w.first_letter() != Some(target_letter))
        .collect();
    distractors.shuffle(rng);
    if distractors.len() < CHOICE_DISTRACTORS {
        tracing::warn!(
            letter = %target_letter,
            available = distractors.len(),
            "short on non-matching words, serving a smaller round"
        );
    }
    distractors.truncate(CHOICE_DISTRACTORS);

    let mut options: Vec<VocabularyItem> = distractors.into_iter().cloned().collect();
    options.push(correct.clone());
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|w| w.id == correct.id)
        .expect("correct word is always present in options");

    Ok(LetterToPictureQuestion {
        target: target.clone(),
        options,
        correct_index,
    })
}

// ==================== Picture-to-Letter ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureToLetterQuestion {
    pub target: VocabularyItem,
    pub options: Vec<LetterItem>,
    pub correct_index: usize,
}

/// Sample a word, then ask for the letter it starts with.
pub fn generate_picture_to_letter<R: Rng + ?Sized>(
    letters: &[LetterItem],
    vocabulary: &[VocabularyItem],
    rng: &mut R,
) -> Result<PictureToLetterQuestion, EngineError> {
    let target = select_weighted_random(vocabulary, GameVariant::PictureToLetter, rng)?;
    let first = target.first_letter().ok_or_else(|| {
        EngineError::DataUnavailable(format!("word '{}' is empty", target.id))
    })?;

    let correct = letters
        .iter()
        .find(|l| l.letter.to_ascii_lowercase() == first)
        .ok_or_else(|| {
            EngineError::DataUnavailable(format!("no letter item for '{first}'"))
        })?;

    let mut distractors: Vec<&LetterItem> = letters
        .iter()
        .filter(|l| l.id != correct.id && l.letter.to_ascii_lowercase() != first)
        .collect();
    distractors.shuffle(rng);
    if distractors.len() < CHOICE_DISTRACTORS {
        tracing::warn!(
            letter = %first,
            available = distractors.len(),
            "short on letter distractors, serving a smaller round"
        );
    }
    distractors.truncate(CHOICE_DISTRACTORS);

    let mut options: Vec<LetterItem> = distractors.into_iter().cloned().collect();
    options.push(correct.clone());
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|l| l.id == correct.id)
        .expect("correct letter is always present in options");

    Ok(PictureToLetterQuestion {
        target: target.clone(),
        options,
        correct_index,
    })
}
