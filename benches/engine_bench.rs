//! Benchmark suite for lexikid-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lexikid_algo::{
    calculate_weight, generate_typos, select_weighted_random, GameVariant, ItemPools, LetterItem,
    MasteryRecord, QuestionEngine,
};

fn bench_calculate_weight(c: &mut Criterion) {
    let record = MasteryRecord::new(37, 21);
    c.bench_function("calculate_weight", |b| {
        b.iter(|| calculate_weight(black_box(Some(&record))))
    });
}

fn bench_weighted_select_100(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut items: Vec<LetterItem> = (0..100)
        .map(|i| LetterItem::new(format!("item-{i}"), (b'a' + (i % 26) as u8) as char))
        .collect();
    for (i, item) in items.iter_mut().enumerate() {
        for round in 0..10 {
            item.apply_outcome(GameVariant::LetterMatch, round % (i % 4 + 1) == 0);
        }
    }

    c.bench_function("select_weighted_random/100", |b| {
        b.iter(|| {
            select_weighted_random(black_box(&items), GameVariant::LetterMatch, &mut rng).unwrap()
        })
    });
}

fn bench_generate_typos(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    c.bench_function("generate_typos/Grandpa", |b| {
        b.iter(|| generate_typos(black_box("Grandpa"), 3, &mut rng))
    });
}

fn bench_letter_match_round(c: &mut Criterion) {
    let mut pools = ItemPools::new();
    for ch in 'a'..='z' {
        pools.letters.push(LetterItem::new(format!("letter-{ch}"), ch));
    }
    let mut engine = QuestionEngine::with_seed(3);

    c.bench_function("letter_match_round", |b| {
        b.iter(|| engine.letter_match(black_box(&pools)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_calculate_weight,
    bench_weighted_select_100,
    bench_generate_typos,
    bench_letter_match_round
);
criterion_main!(benches);
