//! Mastery Model and Weighted Sampling
//!
//! Per-item, per-variant attempt counters drive adaptive selection:
//!
//! - `weight = 10` for an item never attempted in this variant
//! - `weight = (1 - correct/attempts) * 10 + 1` otherwise
//!
//! Brand-new items land right next to the worst-performing known items at
//! the top of the range, and a perfectly mastered item bottoms out at
//! weight 1 - never zero, so every item keeps a low-frequency refresher
//! tail.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{GameVariant, PracticeItem};

// ==================== Constants ====================

/// Weight assigned to an item with no attempts in the sampled variant
pub const NEW_ITEM_WEIGHT: f64 = 10.0;

/// Scale applied to the failure rate of attempted items
const WEIGHT_SCALE: f64 = 10.0;

/// Weight floor for attempted items, keeping mastered items in rotation
const WEIGHT_FLOOR: f64 = 1.0;

// ==================== Mastery Record ====================

/// Attempts/correct counter for one item in one game variant.
///
/// Created lazily as `{0, 0}` the first time an item is scored; mutated
/// only through [`update_mastery`]; persisted by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub attempts: u32,
    pub correct: u32,
}

impl MasteryRecord {
    /// Build a record, clamping `correct` so the `correct <= attempts`
    /// invariant holds even on malformed persisted input.
    pub fn new(attempts: u32, correct: u32) -> Self {
        Self {
            attempts,
            correct: correct.min(attempts),
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts)
        }
    }
}

// ==================== Operations ====================

/// Sampling weight for a mastery record. Always positive.
pub fn calculate_weight(record: Option<&MasteryRecord>) -> f64 {
    match record {
        Some(r) if r.attempts > 0 => (1.0 - r.accuracy()) * WEIGHT_SCALE + WEIGHT_FLOOR,
        _ => NEW_ITEM_WEIGHT,
    }
}

/// Fold one answer outcome into a record. Pure: the input is untouched and
/// an absent record is treated as `{0, 0}`.
pub fn update_mastery(record: Option<&MasteryRecord>, is_correct: bool) -> MasteryRecord {
    let prev = record.copied().unwrap_or_default();
    MasteryRecord {
        attempts: prev.attempts + 1,
        correct: prev.correct + u32::from(is_correct),
    }
}

/// Draw one item with probability proportional to its weight in `variant`.
///
/// Cumulative draw in `[0, total)` with a linear subtraction scan; the last
/// item absorbs any floating-point shortfall.
pub fn select_weighted_random<'a, T, R>(
    items: &'a [T],
    variant: GameVariant,
    rng: &mut R,
) -> Result<&'a T, EngineError>
where
    T: PracticeItem,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(EngineError::EmptyPool(variant.as_str()));
    }

    let total: f64 = items
        .iter()
        .map(|item| calculate_weight(item.mastery_for(variant)))
        .sum();

    let mut remaining = rng.gen_range(0.0..total);
    for item in items {
        remaining -= calculate_weight(item.mastery_for(variant));
        if remaining <= 0.0 {
            return Ok(item);
        }
    }

    Ok(&items[items.len() - 1])
}
