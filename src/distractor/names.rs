//! Name Distractors
//!
//! Curated name pools (common / pet / character / unusual) with a
//! first-letter index, and the difficulty-keyed strategies face-match uses
//! to fill its option grid:
//!
//! - **easy**: prefer names that do NOT share the target's first letter
//! - **medium**: half the slots same-first-letter, half unconstrained
//! - **hard**: every slot same-first-letter
//! - **expert**: typographic mutations of the target name, padded with
//!   same-first-letter names when the typo space runs short
//!
//! Shortfalls degrade silently: the strategies return what exists rather
//! than failing, and log the gap.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::distractor::typo::generate_typos;
use crate::types::Difficulty;

// ==================== Curated Pools ====================

pub const COMMON_NAMES: &[&str] = &[
    "Ava", "Amelia", "Ben", "Bella", "Caleb", "Charlie", "Daisy", "Dylan", "Ella", "Emma",
    "Finn", "Freya", "George", "Grace", "Hannah", "Henry", "Isla", "Ivy", "Jack", "Jacob",
    "Katie", "Kira", "Liam", "Lucas", "Maya", "Mia", "Nina", "Noah", "Olivia", "Oscar",
    "Piper", "Poppy", "Quinn", "Rosie", "Ruby", "Sam", "Sophie", "Theo", "Tilly", "Uma",
    "Violet", "Willow", "Xavier", "Yara", "Zoe",
];

pub const PET_NAMES: &[&str] = &[
    "Bailey", "Biscuit", "Coco", "Fluffy", "Ginger", "Luna", "Max", "Milo", "Mochi", "Patch",
    "Peanut", "Pepper", "Rex", "Rocky", "Shadow", "Smokey", "Socks", "Waffles", "Whiskers",
    "Ziggy",
];

pub const CHARACTER_NAMES: &[&str] = &[
    "Ariel", "Bingo", "Bluey", "Dora", "Elmo", "Elsa", "Grover", "Kermit", "Marshall", "Moana",
    "Nemo", "Olaf", "Peppa", "Pooh", "Shrek", "Simba", "Skye", "Stitch", "Totoro", "Woody",
];

pub const UNUSUAL_NAMES: &[&str] = &[
    "Aurelio", "Bram", "Caspian", "Delphine", "Evander", "Fenwick", "Gulliver", "Hypatia",
    "Ignatius", "Juniper", "Kazimir", "Lysandra", "Meridian", "Nephele", "Oberon", "Peregrine",
    "Quillon", "Rosalind", "Sylvester", "Thaddeus",
];

/// Every curated name, across all four pools.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    COMMON_NAMES
        .iter()
        .chain(PET_NAMES)
        .chain(CHARACTER_NAMES)
        .chain(UNUSUAL_NAMES)
        .copied()
}

fn first_letter_index() -> &'static HashMap<char, Vec<&'static str>> {
    static INDEX: OnceLock<HashMap<char, Vec<&'static str>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<char, Vec<&'static str>> = HashMap::new();
        for name in all_names() {
            if let Some(first) = name.chars().next() {
                index.entry(first.to_ascii_lowercase()).or_default().push(name);
            }
        }
        index
    })
}

/// Curated names starting with `letter`. Case-insensitive.
pub fn names_with_first_letter(letter: char) -> &'static [&'static str] {
    first_letter_index()
        .get(&letter.to_ascii_lowercase())
        .map(|names| names.as_slice())
        .unwrap_or(&[])
}

// ==================== Strategies ====================

/// Inputs for [`get_random_distractors`].
#[derive(Debug, Clone)]
pub struct DistractorOptions {
    pub difficulty: Difficulty,
    pub target_name: String,
}

/// One strategy per difficulty tier, each independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistractorStrategy {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DistractorStrategy {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Easy,
            Difficulty::Medium => Self::Medium,
            Difficulty::Hard => Self::Hard,
            Difficulty::Expert => Self::Expert,
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        exclude: &[String],
        target_name: &str,
        rng: &mut R,
    ) -> Vec<String> {
        let picked = match self {
            Self::Easy => pick_easy(count, exclude, target_name, rng),
            Self::Medium => pick_medium(count, exclude, target_name, rng),
            Self::Hard => pick_hard(count, exclude, target_name, rng),
            Self::Expert => pick_expert(count, exclude, target_name, rng),
        };
        if picked.len() < count {
            tracing::warn!(
                strategy = ?self,
                target = %target_name,
                requested = count,
                produced = picked.len(),
                "name distractor space exhausted, returning short list"
            );
        }
        picked
    }
}

/// Standalone entry point mirroring the strategy dispatch; also re-exported
/// at the crate root for use outside the face games.
pub fn get_random_distractors<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    options: &DistractorOptions,
    rng: &mut R,
) -> Vec<String> {
    DistractorStrategy::from_difficulty(options.difficulty).generate(
        count,
        exclude,
        &options.target_name,
        rng,
    )
}

// ==================== Per-strategy Internals ====================

fn is_blocked(name: &str, target_name: &str, exclude: &[String], chosen: &[String]) -> bool {
    name.eq_ignore_ascii_case(target_name)
        || exclude.iter().any(|e| e.eq_ignore_ascii_case(name))
        || chosen.iter().any(|c| c.eq_ignore_ascii_case(name))
}

fn shares_first_letter(name: &str, target_name: &str) -> bool {
    match (name.chars().next(), target_name.chars().next()) {
        (Some(a), Some(b)) => a.to_ascii_lowercase() == b.to_ascii_lowercase(),
        _ => false,
    }
}

/// Fill `out` up to `count` from `candidates`, skipping blocked names.
fn extend_from<R: Rng + ?Sized>(
    out: &mut Vec<String>,
    candidates: &[&'static str],
    count: usize,
    exclude: &[String],
    target_name: &str,
    rng: &mut R,
) {
    let mut pool: Vec<&'static str> = candidates.to_vec();
    pool.shuffle(rng);
    for name in pool {
        if out.len() >= count {
            break;
        }
        if !is_blocked(name, target_name, exclude, out) {
            out.push(name.to_string());
        }
    }
}

fn pick_easy<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    target_name: &str,
    rng: &mut R,
) -> Vec<String> {
    let different: Vec<&'static str> = all_names()
        .filter(|n| !shares_first_letter(n, target_name))
        .collect();
    let mut out = Vec::with_capacity(count);
    extend_from(&mut out, &different, count, exclude, target_name, rng);
    if out.len() < count {
        let any: Vec<&'static str> = all_names().collect();
        extend_from(&mut out, &any, count, exclude, target_name, rng);
    }
    out
}

fn pick_medium<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    target_name: &str,
    rng: &mut R,
) -> Vec<String> {
    let constrained_quota = (count + 1) / 2;
    let mut out = Vec::with_capacity(count);

    if let Some(first) = target_name.chars().next() {
        extend_from(
            &mut out,
            names_with_first_letter(first),
            constrained_quota,
            exclude,
            target_name,
            rng,
        );
    }

    let any: Vec<&'static str> = all_names().collect();
    extend_from(&mut out, &any, count, exclude, target_name, rng);
    out
}

fn pick_hard<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    target_name: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    if let Some(first) = target_name.chars().next() {
        extend_from(
            &mut out,
            names_with_first_letter(first),
            count,
            exclude,
            target_name,
            rng,
        );
    }
    // Stays same-first-letter even when short; the grid renders fewer tiles.
    out
}

fn pick_expert<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    target_name: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(count);
    for typo in generate_typos(target_name, count, rng) {
        if !is_blocked(&typo, target_name, exclude, &out) {
            out.push(typo);
        }
    }

    if out.len() < count {
        if let Some(first) = target_name.chars().next() {
            extend_from(
                &mut out,
                names_with_first_letter(first),
                count,
                exclude,
                target_name,
                rng,
            );
        }
    }
    out
}
