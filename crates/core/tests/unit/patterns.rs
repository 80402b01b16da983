//! Pattern Generator Tests.
//!
//! Verifies shape and determinism of the synthetic reference streams.

use markov_core::config::{PatternConfig, PatternKind};
use markov_core::patterns;

fn config(kind: PatternKind, length: usize) -> PatternConfig {
    PatternConfig {
        kind,
        length,
        ..PatternConfig::default()
    }
}

#[test]
fn sequential_counts_up() {
    let pattern = patterns::generate(&config(PatternKind::Sequential, 10), 32);
    let raw: Vec<usize> = pattern.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn sequential_wraps_at_universe() {
    let pattern = patterns::generate(&config(PatternKind::Sequential, 10), 4);
    let raw: Vec<usize> = pattern.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
}

#[test]
fn strided_uses_configured_stride() {
    let pattern = patterns::generate(
        &PatternConfig {
            kind: PatternKind::Strided,
            length: 10,
            stride: 2,
            ..PatternConfig::default()
        },
        32,
    );
    let raw: Vec<usize> = pattern.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
}

#[test]
fn interleaved_swaps_pairs() {
    let pattern = patterns::generate(&config(PatternKind::Interleaved, 10), 32);
    let raw: Vec<usize> = pattern.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![1, 0, 3, 2, 5, 4, 7, 6, 9, 8]);
}

#[test]
fn repeated_replays_prefix() {
    let pattern = patterns::generate(
        &PatternConfig {
            kind: PatternKind::Repeated,
            length: 12,
            period: 6,
            ..PatternConfig::default()
        },
        32,
    );
    let raw: Vec<usize> = pattern.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn random_is_in_universe_and_deterministic() {
    let cfg = PatternConfig {
        kind: PatternKind::Random,
        length: 200,
        seed: 42,
        ..PatternConfig::default()
    };
    let first = patterns::generate(&cfg, 32);
    let second = patterns::generate(&cfg, 32);

    assert_eq!(first.len(), 200);
    assert!(first.iter().all(|a| a.in_space(32)));
    assert_eq!(first, second, "same seed must replay the same stream");
}

#[test]
fn random_seeds_differ() {
    let mut cfg = PatternConfig {
        kind: PatternKind::Random,
        length: 64,
        seed: 1,
        ..PatternConfig::default()
    };
    let first = patterns::generate(&cfg, 32);
    cfg.seed = 2;
    let second = patterns::generate(&cfg, 32);
    assert_ne!(first, second);
}

#[test]
fn zero_stride_and_period_are_clamped() {
    let strided = patterns::generate(
        &PatternConfig {
            kind: PatternKind::Strided,
            length: 4,
            stride: 0,
            ..PatternConfig::default()
        },
        8,
    );
    let raw: Vec<usize> = strided.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 1, 2, 3]);

    let repeated = patterns::generate(
        &PatternConfig {
            kind: PatternKind::Repeated,
            length: 3,
            period: 0,
            ..PatternConfig::default()
        },
        8,
    );
    let raw: Vec<usize> = repeated.iter().map(|a| a.val()).collect();
    assert_eq!(raw, vec![0, 0, 0]);
}

#[test]
#[should_panic(expected = "address space must be nonzero")]
fn zero_universe_panics() {
    let _ = patterns::generate(&PatternConfig::default(), 0);
}
