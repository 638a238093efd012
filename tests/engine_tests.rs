use lexikid_algo::{
    Difficulty, EngineError, GameVariant, ItemPools, LetterItem, PersonItem, QuestionEngine,
    Stage, VocabularyItem,
};

fn sample_pools() -> ItemPools {
    let mut pools = ItemPools::new();
    for c in 'a'..='z' {
        pools.letters.push(LetterItem::new(format!("letter-{c}"), c));
    }
    // One word per leading letter so the letter/picture bridging games
    // always have a correct answer regardless of which letter is drawn.
    for (i, word) in [
        "apple", "ball", "cat", "dog", "egg", "fish", "goat", "hat", "igloo", "jam", "kite",
        "lion", "moon", "nest", "owl", "pig", "queen", "rain", "sun", "tree", "umbrella", "van",
        "worm", "xylophone", "yarn", "zebra",
    ]
    .iter()
    .enumerate()
    {
        pools
            .vocabulary
            .push(VocabularyItem::new(format!("word-{i}"), *word).with_image(format!("{word}.png")));
    }
    pools.people = vec![
        PersonItem::new("p1", "Mom").with_photo("mom.jpg"),
        PersonItem::new("p2", "Dad").with_photo("dad.jpg"),
        PersonItem::new("p3", "Nana").with_photo("nana.jpg"),
        PersonItem::new("p4", "Ben").with_photo("ben.jpg"),
    ];
    pools
}

#[test]
fn integration_every_variant_produces_a_round() {
    let pools = sample_pools();
    let mut engine = QuestionEngine::with_seed(1);

    assert_eq!(engine.letter_match(&pools).unwrap().options.len(), 4);
    assert_eq!(engine.letter_hunt(&pools, Difficulty::Medium).unwrap().grid.len(), 15);
    assert!(engine.letter_to_picture(&pools).is_ok());
    assert!(engine.picture_to_letter(&pools).is_ok());
    assert!(engine.starts_with(&pools, Stage::One).is_ok());
    assert!(engine.ends_with(&pools, Stage::Two).is_ok());
    assert!(engine.word_match(&pools).is_ok());
    assert!(engine.picture_match(&pools).is_ok());
    assert_eq!(
        engine.splatter_round(&pools, Difficulty::Hard).unwrap().pool.len(),
        9
    );
    assert!(engine.face_match(&pools, Difficulty::Easy).is_some());
    assert!(engine.name_to_face(&pools).is_some());
}

#[test]
fn integration_empty_pools_fail_loudly_except_faces() {
    let pools = ItemPools::new();
    let mut engine = QuestionEngine::with_seed(2);

    assert!(matches!(
        engine.letter_match(&pools),
        Err(EngineError::EmptyPool(_))
    ));
    assert!(matches!(
        engine.word_match(&pools),
        Err(EngineError::EmptyPool(_))
    ));
    // Faces soft-fail: an empty family is an expected state, not a bug.
    assert!(engine.face_match(&pools, Difficulty::Expert).is_none());
    assert!(engine.name_to_face(&pools).is_none());
}

#[test]
fn integration_splatter_pool_depletes_to_empty() {
    let pools = sample_pools();
    let mut engine = QuestionEngine::with_seed(3);

    let round = engine.splatter_round(&pools, Difficulty::Easy).unwrap();
    let mut remaining = round.pool.clone();
    assert_eq!(remaining.len(), 5);

    // Play the whole pool down: every call-out must come from the
    // survivors, and the pool is never re-dealt.
    let mut cleared = round.target.clone();
    for expected_len in (1..=4usize).rev() {
        remaining.retain(|w| w.id != cleared.id);
        assert_eq!(remaining.len(), expected_len);
        cleared = engine.next_splatter_target(&remaining).unwrap().clone();
        assert!(remaining.iter().any(|w| w.id == cleared.id));
    }

    remaining.retain(|w| w.id != cleared.id);
    assert!(remaining.is_empty());
    assert!(engine.next_splatter_target(&remaining).is_err());
}

#[test]
fn integration_mastery_loop_feeds_back_into_selection() {
    let mut pools = sample_pools();
    let mut engine = QuestionEngine::with_seed(4);

    // Answer letter-match rounds correctly for a while; the trained
    // letters' records grow while every other variant stays untouched.
    for _ in 0..50 {
        let q = engine.letter_match(&pools).unwrap();
        let id = q.target.id.clone();
        let item = pools.letters.iter_mut().find(|l| l.id == id).unwrap();
        item.apply_outcome(GameVariant::LetterMatch, true);
    }

    let trained: u32 = pools
        .letters
        .iter()
        .filter_map(|l| l.mastery_by_variant.get(&GameVariant::LetterMatch))
        .map(|r| r.attempts)
        .sum();
    assert_eq!(trained, 50);
    assert!(pools
        .letters
        .iter()
        .all(|l| !l.mastery_by_variant.contains_key(&GameVariant::LetterHunt)));
}

#[test]
fn integration_descriptors_serialize_camel_case() {
    let pools = sample_pools();
    let mut engine = QuestionEngine::with_seed(5);

    let q = engine.letter_match(&pools).unwrap();
    let json = serde_json::to_value(&q).unwrap();
    assert!(json.get("correctIndex").is_some());
    assert!(json["target"].get("masteryByVariant").is_some());

    let hunt = engine.letter_hunt(&pools, Difficulty::Expert).unwrap();
    let json = serde_json::to_value(&hunt).unwrap();
    assert_eq!(json["targetCount"], 5);
    assert_eq!(json["difficulty"], "expert");

    let phonics = engine.starts_with(&pools, Stage::Two).unwrap();
    let json = serde_json::to_value(&phonics).unwrap();
    assert_eq!(json["stage"], "two");
    assert!(json.get("correctIndices").is_some());

    // Variant keys travel kebab-case, matching the frontend's game ids.
    let key = serde_json::to_string(&GameVariant::SightWordSplatter).unwrap();
    assert_eq!(key, "\"sight-word-splatter\"");
}

#[test]
fn integration_stage_recommendation_round_trip() {
    let mut pools = sample_pools();
    let mut engine = QuestionEngine::with_seed(6);

    // A fresh word always starts at stage one.
    let q = engine.starts_with(&pools, Stage::One).unwrap();
    let id = q.target.id.clone();
    {
        let word = pools.vocabulary.iter().find(|w| w.id == id).unwrap();
        assert_eq!(
            Stage::recommended_for(word.mastery_by_variant.get(&GameVariant::StartsWith)),
            Stage::One
        );
    }

    // Six straight correct answers clear the unlock bar (>80% over >=5).
    let word = pools.vocabulary.iter_mut().find(|w| w.id == id).unwrap();
    for _ in 0..6 {
        word.apply_outcome(GameVariant::StartsWith, true);
    }
    assert_eq!(
        Stage::recommended_for(word.mastery_by_variant.get(&GameVariant::StartsWith)),
        Stage::Two
    );
}
