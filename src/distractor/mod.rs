//! Distractor Strategies
//!
//! Plausible-wrong-answer generation, split by domain:
//!
//! - [`letters`] - visually confusable letter clusters and random letter fill
//! - [`names`] - curated name pools with a first-letter index and the
//!   difficulty-keyed strategies used by face-match
//! - [`typo`] - typographic mutations of a name (expert face-match)

pub mod letters;
pub mod names;
pub mod typo;

pub use letters::{confusable_cluster, random_letters_excluding, CONFUSABLE_CLUSTERS};
pub use names::{get_random_distractors, DistractorOptions, DistractorStrategy};
pub use typo::generate_typos;
