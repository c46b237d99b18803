//! Merge/optimize through the public API

use mcrkit::mcr::{
    merge_and_optimize, merge_and_optimize_interleaved, Command, HumanizationSettings,
    MatchMode, MergeOptimizer,
};

use crate::helpers::{downs, fixture_commands, rng};

fn settings() -> HumanizationSettings {
    HumanizationSettings {
        delay_variation_pct: 20.0,
        typing_errors_pct: 0.0,
        hesitation_pauses_pct: 50.0,
        preserve_structure: false,
        ..HumanizationSettings::default()
    }
}

#[test]
fn contiguous_merge_touches_only_the_located_motif() {
    let a = fixture_commands("burst_a.mcr");
    let b = fixture_commands("burst_b.mcr");
    let out = merge_and_optimize(&a, &b, &settings(), &mut rng(5));

    // Prefix (mouse + delay) and suffix (delay, Q, delay) come through untouched
    assert_eq!(&out[..2], &a[..2]);
    assert_eq!(&out[out.len() - 3..], &a[a.len() - 3..]);

    let keys: Vec<Command> = out.iter().filter(|c| c.is_keyboard()).cloned().collect();
    let mut expected = downs("HELLO");
    expected.push(Command::key_down("Q"));
    assert_eq!(keys, expected);
    assert!(out.len() > a.len());
}

#[test]
fn spaced_recording_is_returned_unchanged_by_default() {
    let a = fixture_commands("spaced_hello.mcr");
    let b = fixture_commands("burst_b.mcr");
    assert_eq!(merge_and_optimize(&a, &b, &settings(), &mut rng(5)), a);
}

#[test]
fn interleaved_mode_finds_spaced_motif() {
    let a = fixture_commands("spaced_hello.mcr");
    let b = fixture_commands("burst_b.mcr");
    let out = merge_and_optimize_interleaved(&a, &b, &settings(), &mut rng(5));

    assert_ne!(out, a);
    let keys: Vec<Command> = out.iter().filter(|c| c.is_keyboard()).cloned().collect();
    assert_eq!(keys, downs("HELLO"));
}

#[test]
fn no_shared_pattern_returns_a() {
    let a = fixture_commands("login.mcr");
    let b = downs("zzzz");
    assert_eq!(merge_and_optimize(&a, &b, &settings(), &mut rng(5)), a);
}

#[test]
fn optimizer_is_reproducible_with_seed() {
    let a = fixture_commands("burst_a.mcr");
    let b = fixture_commands("burst_b.mcr");
    let s = settings();

    let first = MergeOptimizer::new(&s, rng(77))
        .with_mode(MatchMode::Contiguous)
        .run(&a, &b, |_| {})
        .unwrap();
    let second = MergeOptimizer::new(&s, rng(77))
        .run(&a, &b, |_| {})
        .unwrap();
    assert_eq!(first, second);
}
