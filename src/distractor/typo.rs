//! Typographic Mutations
//!
//! Expert face-match distractors are near-miss spellings of the target name,
//! built from four mutation families:
//!
//! 1. adjacent-character transposition
//! 2. character doubling
//! 3. single-character deletion (names of 4+ characters only, so short
//!    names stay recognizable)
//! 4. phonetic/visual substitution from a fixed table, case-preserving
//!
//! The full mutation superset is deduplicated case-insensitively, anything
//! equal to the original is dropped, and a random sample of the requested
//! size is returned.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Minimum name length before deletion mutations apply
const MIN_DELETION_LEN: usize = 4;

/// Phonetic/visual substitution table (lowercase; case restored per site)
const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['e', 'o']),
    ('e', &['a', 'i']),
    ('i', &['e', 'y']),
    ('o', &['a', 'u']),
    ('u', &['o']),
    ('b', &['d', 'p']),
    ('d', &['b', 't']),
    ('p', &['b', 'q']),
    ('q', &['p']),
    ('m', &['n']),
    ('n', &['m']),
    ('c', &['k', 's']),
    ('k', &['c']),
    ('s', &['z', 'c']),
    ('z', &['s']),
    ('g', &['j']),
    ('j', &['g']),
    ('f', &['v']),
    ('v', &['f']),
    ('w', &['v']),
    ('y', &['i']),
    ('t', &['d']),
    ('l', &['r']),
    ('r', &['l']),
];

fn substitutions_for(c: char) -> &'static [char] {
    let lower = c.to_ascii_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}

/// Up to `count` unique typo variants of `name`, none of them
/// case-insensitively equal to the original. Shorter than `count` only when
/// the mutation space itself is smaller.
pub fn generate_typos<R: Rng + ?Sized>(name: &str, count: usize, rng: &mut R) -> Vec<String> {
    if name.is_empty() || count == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut variants: Vec<String> = Vec::new();

    for i in 0..chars.len().saturating_sub(1) {
        let mut v = chars.clone();
        v.swap(i, i + 1);
        variants.push(v.into_iter().collect());
    }

    for i in 0..chars.len() {
        let mut v = chars.clone();
        v.insert(i, chars[i]);
        variants.push(v.into_iter().collect());
    }

    if chars.len() >= MIN_DELETION_LEN {
        for i in 0..chars.len() {
            let mut v = chars.clone();
            v.remove(i);
            variants.push(v.into_iter().collect());
        }
    }

    for i in 0..chars.len() {
        for &sub in substitutions_for(chars[i]) {
            let mut v = chars.clone();
            v[i] = if chars[i].is_ascii_uppercase() {
                sub.to_ascii_uppercase()
            } else {
                sub
            };
            variants.push(v.into_iter().collect());
        }
    }

    let original = name.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<String> = Vec::new();
    for variant in variants {
        let key = variant.to_lowercase();
        if key != original && seen.insert(key) {
            unique.push(variant);
        }
    }

    unique.shuffle(rng);
    unique.truncate(count);
    unique
}
