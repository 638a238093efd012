//! Face-Game Generators
//!
//! face-match (pick the right name for a photo) and name-to-face (pick the
//! right photo for a name). Both require at least one person with a photo
//! who is not flagged distractor-only; with none they return `None` - an
//! expected empty state that routes the caller to the family-setup flow,
//! not an error.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distractor::names::{get_random_distractors, DistractorOptions};
use crate::mastery::select_weighted_random;
use crate::question::FACE_DISTRACTORS;
use crate::types::{Difficulty, GameVariant, PersonItem};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMatchQuestion {
    pub target: PersonItem,
    pub difficulty: Difficulty,
    /// Name labels; the target's photo is the prompt
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Show a photo, ask for the name. Easy/medium rounds use other real
/// people's names; hard/expert rounds synthesize distractors from the
/// curated pools and typo mutations.
pub fn generate_face_match<R: Rng + ?Sized>(
    people: &[PersonItem],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<FaceMatchQuestion> {
    let target = sample_target(people, GameVariant::FaceMatch, rng)?;

    let distractor_names = match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            let mut names: Vec<&str> = people
                .iter()
                .filter(|p| p.id != target.id && !p.name.eq_ignore_ascii_case(&target.name))
                .map(|p| p.name.as_str())
                .collect();
            names.shuffle(rng);

            let mut picked: Vec<String> = Vec::with_capacity(FACE_DISTRACTORS);
            for name in names {
                if picked.len() >= FACE_DISTRACTORS {
                    break;
                }
                if !picked.iter().any(|p| p.eq_ignore_ascii_case(name)) {
                    picked.push(name.to_string());
                }
            }
            if picked.len() < FACE_DISTRACTORS {
                tracing::warn!(
                    target_id = %target.id,
                    available = picked.len(),
                    "few other people known, serving a smaller name grid"
                );
            }
            picked
        }
        Difficulty::Hard | Difficulty::Expert => {
            let options = DistractorOptions {
                difficulty,
                target_name: target.name.clone(),
            };
            get_random_distractors(FACE_DISTRACTORS, &[], &options, rng)
        }
    };

    let mut options = vec![target.name.clone()];
    options.extend(distractor_names);
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|n| n == &target.name)
        .expect("target name is always present in options");

    Some(FaceMatchQuestion {
        target: target.clone(),
        difficulty,
        options,
        correct_index,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameToFaceQuestion {
    pub target: PersonItem,
    /// Full person entries; every option has a photo to render
    pub options: Vec<PersonItem>,
    pub correct_index: usize,
}

/// Say a name, ask for the face. Distractors come only from other
/// photographed people (distractor-only uploads included - that is their
/// purpose).
pub fn generate_name_to_face<R: Rng + ?Sized>(
    people: &[PersonItem],
    rng: &mut R,
) -> Option<NameToFaceQuestion> {
    let target = sample_target(people, GameVariant::NameToFace, rng)?;

    let mut distractors: Vec<&PersonItem> = people
        .iter()
        .filter(|p| p.id != target.id && p.has_photo())
        .collect();
    distractors.shuffle(rng);
    if distractors.len() < FACE_DISTRACTORS {
        tracing::warn!(
            target_id = %target.id,
            available = distractors.len(),
            "few photographed people known, serving a smaller face grid"
        );
    }
    distractors.truncate(FACE_DISTRACTORS);

    let mut options: Vec<PersonItem> = distractors.into_iter().cloned().collect();
    options.push(target.clone());
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|p| p.id == target.id)
        .expect("target person is always present in options");

    Some(NameToFaceQuestion {
        target: target.clone(),
        options,
        correct_index,
    })
}

/// Weighted draw over eligible targets; `None` when nobody qualifies yet.
fn sample_target<'a, R: Rng + ?Sized>(
    people: &'a [PersonItem],
    variant: GameVariant,
    rng: &mut R,
) -> Option<&'a PersonItem> {
    let eligible: Vec<&PersonItem> = people.iter().filter(|p| p.is_eligible_target()).collect();
    if eligible.is_empty() {
        return None;
    }
    select_weighted_random(&eligible, variant, rng).ok().copied()
}
