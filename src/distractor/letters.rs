//! Letter Distractors
//!
//! Early readers reliably mix up two clusters of glyphs: the flipped/rotated
//! `b d p q` family and the arch/hump `m w n u` family. When a target falls
//! in one of these clusters the whole cluster is served as the option set.

use rand::seq::SliceRandom;
use rand::Rng;

/// Visually confusable letter clusters, served whole as option sets.
pub const CONFUSABLE_CLUSTERS: [[char; 4]; 2] = [['b', 'd', 'p', 'q'], ['m', 'w', 'n', 'u']];

/// Cluster containing `letter`, if it belongs to one. Case-insensitive.
pub fn confusable_cluster(letter: char) -> Option<[char; 4]> {
    let lower = letter.to_ascii_lowercase();
    CONFUSABLE_CLUSTERS.iter().copied().find(|c| c.contains(&lower))
}

/// Up to `count` unique random lowercase letters, none of which appear in
/// `exclude`. Short only if the exclusions eat most of the alphabet.
pub fn random_letters_excluding<R: Rng + ?Sized>(
    exclude: &[char],
    count: usize,
    rng: &mut R,
) -> Vec<char> {
    let excluded: Vec<char> = exclude.iter().map(|c| c.to_ascii_lowercase()).collect();
    let mut candidates: Vec<char> = ('a'..='z').filter(|c| !excluded.contains(c)).collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
