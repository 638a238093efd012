//! Engine Configuration
//!
//! Numeric knobs for the variants that scale with difficulty. Defaults match
//! the shipped game tuning; the embedding app may deserialize overrides.

use serde::{Deserialize, Serialize};

use crate::types::Difficulty;

/// Grid shape for one letter-hunt difficulty tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    /// Total cells in the grid
    pub total: usize,
    /// Cells seeded with the target letter
    pub target_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterHuntConfig {
    pub easy: GridSpec,
    pub medium: GridSpec,
    pub hard: GridSpec,
    pub expert: GridSpec,
}

impl Default for LetterHuntConfig {
    fn default() -> Self {
        Self {
            easy: GridSpec { total: 10, target_count: 2 },
            medium: GridSpec { total: 15, target_count: 3 },
            hard: GridSpec { total: 20, target_count: 4 },
            expert: GridSpec { total: 25, target_count: 5 },
        }
    }
}

impl LetterHuntConfig {
    pub fn grid(&self, difficulty: Difficulty) -> GridSpec {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
        }
    }
}

/// Distractor counts for the single depleting splatter pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplatterConfig {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub expert: usize,
}

impl Default for SplatterConfig {
    fn default() -> Self {
        Self {
            easy: 4,
            medium: 6,
            hard: 8,
            expert: 10,
        }
    }
}

impl SplatterConfig {
    pub fn distractors(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub letter_hunt: LetterHuntConfig,
    #[serde(default)]
    pub splatter: SplatterConfig,
}
