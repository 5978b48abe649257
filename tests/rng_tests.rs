//! RNG tests
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - Fisher–Yates shuffle: перестановка, чистота, повторяемость
//! - стабильность hash-reseeding RngSeed

use std::collections::HashSet;

use casino_engine::domain::Deck;
use casino_engine::engine::{shuffle, RandomSource};
use casino_engine::infra::{DeterministicRng, RngSeed, ScriptedRng, SystemRng};

#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_u64(123);
    let mut r2 = DeterministicRng::from_u64(123);

    let base: Vec<u32> = (0..52).collect();
    assert_eq!(shuffle(&base, &mut r1), shuffle(&base, &mut r2));
}

#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_u64(111);
    let mut r2 = DeterministicRng::from_u64(222);

    let base: Vec<u32> = (0..52).collect();
    assert_ne!(shuffle(&base, &mut r1), shuffle(&base, &mut r2));
}

#[test]
fn shuffled_deck_is_a_permutation_and_input_untouched() {
    let deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_u64(555);

    let shuffled = deck.shuffled(&mut rng);

    assert_eq!(deck, Deck::standard_52(), "shuffle must not mutate its input");
    assert_eq!(shuffled.len(), 52);
    let a: HashSet<_> = deck.cards.iter().collect();
    let b: HashSet<_> = shuffled.cards.iter().collect();
    assert_eq!(a, b);
    assert_ne!(shuffled.cards, deck.cards);
}

#[test]
fn shuffle_again_gives_new_permutation() {
    let deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_u64(9);

    let first = deck.shuffled(&mut rng);
    let second = deck.shuffled(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn shuffle_is_roughly_uniform_for_three_items() {
    let mut rng = DeterministicRng::from_u64(2024);
    let mut counts = std::collections::HashMap::new();
    for _ in 0..6_000 {
        *counts.entry(shuffle(&[1, 2, 3], &mut rng)).or_insert(0u32) += 1;
    }

    assert_eq!(counts.len(), 6, "all 3! permutations must appear");
    for (perm, n) in counts {
        assert!((800..1200).contains(&n), "{perm:?} appeared {n} times");
    }
}

#[test]
fn roll_die_stays_in_range() {
    let mut rng = DeterministicRng::from_u64(77);
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let face = rng.roll_die();
        assert!((1..=6).contains(&face));
        seen.insert(face);
    }
    assert_eq!(seen.len(), 6);

    let mut sys = SystemRng;
    for _ in 0..100 {
        assert!((1..=6).contains(&sys.roll_die()));
    }
}

#[test]
fn scripted_rng_cycles_and_wraps() {
    let mut rng = ScriptedRng::new(vec![0, 7]);
    assert_eq!(rng.next_index(6), 0);
    assert_eq!(rng.next_index(6), 1);
    assert_eq!(rng.next_index(6), 0);

    let mut six = ScriptedRng::always_face(6);
    assert_eq!(six.roll_die(), 6);
    assert_eq!(six.roll_die(), 6);
}

#[test]
fn rngseed_derive_changes_per_round() {
    let base = RngSeed::from_u64(777);

    let s1 = base.derive(1);
    let s2 = base.derive(2);
    assert_ne!(s1, s2);
    assert_eq!(s1, base.derive(1));
    assert_ne!(s1, RngSeed::from_u64(778).derive(1));
}

#[test]
fn rngseed_deterministic_shuffle() {
    let seed = RngSeed::from_u64(123).derive(5);

    let deck = Deck::standard_52();
    assert_eq!(deck.shuffled(&mut seed.to_rng()), deck.shuffled(&mut seed.to_rng()));
}
