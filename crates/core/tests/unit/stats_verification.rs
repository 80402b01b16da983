//! SimStats unit tests.
//!
//! Verifies default initialization, event folding, and derived metric
//! computation for the simulation statistics structure.

use markov_core::common::Addr;
use markov_core::predictor::PrefetchEvent;
use markov_core::stats::{SimStats, STATS_SECTIONS};

fn event(hit: bool, prefetch_hit: bool, prefetch: bool) -> PrefetchEvent {
    PrefetchEvent {
        address: Addr::new(0),
        hit,
        prefetch_hit,
        demand_hit: hit && !prefetch_hit,
        prefetch,
        prefetch_address: if prefetch { Some(Addr::new(1)) } else { None },
        history: Vec::new(),
    }
}

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.references, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.prefetch_hits, 0);
    assert_eq!(stats.demand_hits, 0);
    assert_eq!(stats.prefetches_issued, 0);
}

#[test]
fn record_partitions_hits_and_misses() {
    let mut stats = SimStats::default();
    stats.record(&event(false, false, true));
    stats.record(&event(true, false, false));
    stats.record(&event(true, true, true));
    stats.record(&event(false, false, false));

    assert_eq!(stats.references, 4);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.demand_hits, 1);
    assert_eq!(stats.prefetch_hits, 1);
    assert_eq!(stats.prefetches_issued, 2);
    assert_eq!(stats.hits + stats.misses, stats.references);
}

#[test]
fn prefetch_accuracy_derivation() {
    let mut stats = SimStats::default();
    for _ in 0..8 {
        stats.record(&event(false, false, true));
    }
    for _ in 0..6 {
        stats.record(&event(true, true, false));
    }

    let accuracy = stats.prefetch_hits as f64 / stats.prefetches_issued as f64;
    assert!((accuracy - 0.75).abs() < 1e-10);
}

#[test]
fn sections_constant_is_stable() {
    assert_eq!(STATS_SECTIONS, &["summary", "classification", "prefetch"]);
}

#[test]
fn printing_empty_stats_does_not_divide_by_zero() {
    // Exercises the zero-reference guards in every section.
    let stats = SimStats::default();
    stats.print();
    stats.print_sections(&["summary".to_string()]);
}
