//! Common Types
//!
//! Shared data structures used across the question engine: game variant and
//! difficulty keys, the three practice-item families, and the immutable pool
//! snapshot handed to every generator call.
//!
//! Wire-visible types serialize camelCase (structs) / kebab-case or
//! lowercase (enum keys) to match the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mastery::{update_mastery, MasteryRecord};

// ==================== Constants ====================

/// Attempts required before a stage-2 phonics round can unlock
pub const STAGE_TWO_MIN_ATTEMPTS: u32 = 5;

/// Accuracy required before a stage-2 phonics round can unlock
pub const STAGE_TWO_MIN_ACCURACY: f64 = 0.8;

// ==================== Game Variants ====================

/// Practice-game variant key.
///
/// Mastery is tracked per item *per variant*: performance in letter-hunt
/// never influences selection for letter-match on the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameVariant {
    LetterMatch,
    LetterHunt,
    LetterToPicture,
    PictureToLetter,
    StartsWith,
    EndsWith,
    WordMatch,
    PictureMatch,
    SightWordSplatter,
    FaceMatch,
    NameToFace,
}

impl GameVariant {
    pub const ALL: [GameVariant; 11] = [
        Self::LetterMatch,
        Self::LetterHunt,
        Self::LetterToPicture,
        Self::PictureToLetter,
        Self::StartsWith,
        Self::EndsWith,
        Self::WordMatch,
        Self::PictureMatch,
        Self::SightWordSplatter,
        Self::FaceMatch,
        Self::NameToFace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LetterMatch => "letter-match",
            Self::LetterHunt => "letter-hunt",
            Self::LetterToPicture => "letter-to-picture",
            Self::PictureToLetter => "picture-to-letter",
            Self::StartsWith => "starts-with",
            Self::EndsWith => "ends-with",
            Self::WordMatch => "word-match",
            Self::PictureMatch => "picture-match",
            Self::SightWordSplatter => "sight-word-splatter",
            Self::FaceMatch => "face-match",
            Self::NameToFace => "name-to-face",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

// ==================== Difficulty ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::Medium,
        }
    }
}

// ==================== Phonics Stage ====================

/// Difficulty tier for starts-with/ends-with rounds.
///
/// Stage 1 rounds have at most one matching option; stage 2 rounds are
/// multi-select. The stage is always supplied by the caller, computed from
/// the *previous* round's mastery - generators never infer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    One,
    Two,
}

impl Stage {
    /// Stage the caller should request for the next round, given the
    /// target's mastery from the rounds played so far.
    pub fn recommended_for(record: Option<&MasteryRecord>) -> Self {
        match record {
            Some(r)
                if r.attempts >= STAGE_TWO_MIN_ATTEMPTS
                    && r.accuracy() > STAGE_TWO_MIN_ACCURACY =>
            {
                Self::Two
            }
            _ => Self::One,
        }
    }

    /// Maximum number of matching options placed in a round at this stage.
    pub fn match_quota(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

// ==================== Practice Items ====================

/// Per-variant mastery records for one item.
pub type MasteryMap = HashMap<GameVariant, MasteryRecord>;

/// Common surface shared by the three practice-item families, used by the
/// weighted sampler.
pub trait PracticeItem {
    fn item_id(&self) -> &str;
    fn mastery_for(&self, variant: GameVariant) -> Option<&MasteryRecord>;
}

impl<T: PracticeItem> PracticeItem for &T {
    fn item_id(&self) -> &str {
        (*self).item_id()
    }

    fn mastery_for(&self, variant: GameVariant) -> Option<&MasteryRecord> {
        (*self).mastery_for(variant)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterItem {
    pub id: String,
    pub letter: char,
    #[serde(default)]
    pub mastery_by_variant: MasteryMap,
}

impl LetterItem {
    pub fn new(id: impl Into<String>, letter: char) -> Self {
        Self {
            id: id.into(),
            letter,
            mastery_by_variant: MasteryMap::new(),
        }
    }

    /// Record an answer outcome locally. The caller persists the map
    /// upstream; applying it here first keeps the next weighted draw from
    /// re-weighting against stale data.
    pub fn apply_outcome(&mut self, variant: GameVariant, is_correct: bool) {
        let next = update_mastery(self.mastery_by_variant.get(&variant), is_correct);
        self.mastery_by_variant.insert(variant, next);
    }
}

impl PracticeItem for LetterItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn mastery_for(&self, variant: GameVariant) -> Option<&MasteryRecord> {
        self.mastery_by_variant.get(&variant)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub mastery_by_variant: MasteryMap,
}

impl VocabularyItem {
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            image_url: None,
            mastery_by_variant: MasteryMap::new(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Lowercased leading letter of the word, if any.
    pub fn first_letter(&self) -> Option<char> {
        self.word.chars().next().map(|c| c.to_ascii_lowercase())
    }

    /// Lowercased trailing letter of the word, if any.
    pub fn last_letter(&self) -> Option<char> {
        self.word.chars().next_back().map(|c| c.to_ascii_lowercase())
    }

    pub fn apply_outcome(&mut self, variant: GameVariant, is_correct: bool) {
        let next = update_mastery(self.mastery_by_variant.get(&variant), is_correct);
        self.mastery_by_variant.insert(variant, next);
    }
}

impl PracticeItem for VocabularyItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn mastery_for(&self, variant: GameVariant) -> Option<&MasteryRecord> {
        self.mastery_by_variant.get(&variant)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Uploaded only to pad face grids; never selectable as a target.
    #[serde(default)]
    pub distractor_only: bool,
    #[serde(default)]
    pub mastery_by_variant: MasteryMap,
}

impl PersonItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            photo_url: None,
            distractor_only: false,
            mastery_by_variant: MasteryMap::new(),
        }
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn as_distractor_only(mut self) -> Self {
        self.distractor_only = true;
        self
    }

    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }

    /// Target eligibility for the face games: photographed and not flagged
    /// distractor-only.
    pub fn is_eligible_target(&self) -> bool {
        self.has_photo() && !self.distractor_only
    }

    pub fn apply_outcome(&mut self, variant: GameVariant, is_correct: bool) {
        let next = update_mastery(self.mastery_by_variant.get(&variant), is_correct);
        self.mastery_by_variant.insert(variant, next);
    }
}

impl PracticeItem for PersonItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn mastery_for(&self, variant: GameVariant) -> Option<&MasteryRecord> {
        self.mastery_by_variant.get(&variant)
    }
}

// ==================== Pool Snapshot ====================

/// Immutable snapshot of the practice-item pools, populated by the data
/// loading layer and injected into every generator call. Generators never
/// fetch or mutate data themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPools {
    pub letters: Vec<LetterItem>,
    pub vocabulary: Vec<VocabularyItem>,
    pub people: Vec<PersonItem>,
}

impl ItemPools {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trip() {
        for variant in GameVariant::ALL {
            assert_eq!(GameVariant::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(GameVariant::parse("tic-tac-toe"), None);
    }

    #[test]
    fn test_difficulty_parse_defaults_to_medium() {
        assert_eq!(Difficulty::parse("expert"), Difficulty::Expert);
        assert_eq!(Difficulty::parse("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::parse("???"), Difficulty::Medium);
    }

    #[test]
    fn test_stage_unlock_rule() {
        assert_eq!(Stage::recommended_for(None), Stage::One);

        let not_enough_attempts = MasteryRecord::new(4, 4);
        assert_eq!(Stage::recommended_for(Some(&not_enough_attempts)), Stage::One);

        let low_accuracy = MasteryRecord::new(10, 8);
        assert_eq!(Stage::recommended_for(Some(&low_accuracy)), Stage::One);

        let unlocked = MasteryRecord::new(10, 9);
        assert_eq!(Stage::recommended_for(Some(&unlocked)), Stage::Two);
    }

    #[test]
    fn test_apply_outcome_is_per_variant() {
        let mut letter = LetterItem::new("l1", 'a');
        letter.apply_outcome(GameVariant::LetterMatch, true);
        letter.apply_outcome(GameVariant::LetterMatch, false);

        let record = letter.mastery_for(GameVariant::LetterMatch).unwrap();
        assert_eq!(record.attempts, 2);
        assert_eq!(record.correct, 1);
        assert!(letter.mastery_for(GameVariant::LetterHunt).is_none());
    }

    #[test]
    fn test_word_letter_helpers() {
        let word = VocabularyItem::new("w1", "Cat");
        assert_eq!(word.first_letter(), Some('c'));
        assert_eq!(word.last_letter(), Some('t'));

        let empty = VocabularyItem::new("w2", "");
        assert_eq!(empty.first_letter(), None);
    }

    #[test]
    fn test_person_target_eligibility() {
        let no_photo = PersonItem::new("p1", "Nana");
        assert!(!no_photo.is_eligible_target());

        let photographed = PersonItem::new("p2", "Ben").with_photo("ben.jpg");
        assert!(photographed.is_eligible_target());

        let extra = PersonItem::new("p3", "Milo").with_photo("milo.jpg").as_distractor_only();
        assert!(!extra.is_eligible_target());
    }
}
