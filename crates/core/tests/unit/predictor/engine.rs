//! Sequential Reference Model Tests.
//!
//! Drives the one-step-per-reference model through the canonical access
//! patterns and verifies classification, learning, prediction, and the
//! per-reference invariants.

use markov_core::common::Addr;
use markov_core::config::{PatternConfig, PatternKind};
use markov_core::patterns;
use markov_core::predictor::{AccessTag, MarkovPrefetcher, Predictor};

use crate::common::harness::{assert_event_invariants, predictor_config, reference, run};

// ══════════════════════════════════════════════════════════
// 1. Cold start
// ══════════════════════════════════════════════════════════

/// The first reference after construction is a miss with no prefetch.
#[test]
fn first_reference_is_cold_miss() {
    let mut model = reference();
    let event = model.access(Addr::new(12));

    assert!(!event.hit);
    assert!(!event.prefetch_hit);
    assert!(!event.demand_hit);
    assert!(!event.prefetch);
    assert_eq!(event.prefetch_address, None);
    assert_eq!(event.history.len(), 1);
    assert_eq!(event.history[0].address, Addr::new(12));
    assert_eq!(event.history[0].tag, AccessTag::Demand);

    // No previous address existed, so nothing was learned.
    let table = model.table_snapshot();
    assert!(table.iter().flatten().all(|&c| c == 0));
}

// ══════════════════════════════════════════════════════════
// 2. Sequential pattern
// ══════════════════════════════════════════════════════════

/// Sequential first pass: every reference misses and no prefetch fires,
/// because the successor row of the newest address is always still empty
/// when it is queried.
#[test]
fn sequential_first_pass_all_miss() {
    let mut model = reference();
    let events = run(&mut model, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    for event in &events {
        assert!(!event.hit, "addr {} must miss", event.address);
        assert!(!event.prefetch, "addr {} must not prefetch", event.address);
        assert_event_invariants(event, 5);
    }

    // Exactly one learned edge per visited row: i -> i+1.
    let table = model.table_snapshot();
    for i in 0..9 {
        assert_eq!(table[i][i + 1], 1, "edge {} -> {} must be learned", i, i + 1);
        let row_total: u32 = table[i].iter().sum();
        assert_eq!(row_total, 1, "row {} must hold a single edge", i);
    }
}

// ══════════════════════════════════════════════════════════
// 3. Strided pattern
// ══════════════════════════════════════════════════════════

/// Strided first pass learns the i -> i+2 edges without prefetching.
#[test]
fn strided_first_pass_learns_edges() {
    let mut model = reference();
    let events = run(&mut model, &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);

    for event in &events {
        assert!(!event.hit);
        assert!(!event.prefetch);
    }
    let table = model.table_snapshot();
    for i in (0..18).step_by(2) {
        assert_eq!(table[i][i + 2], 1, "edge {} -> {} must be learned", i, i + 2);
    }
}

/// A strided working set larger than the window turns the second pass into
/// a prefetch-hit stream once the wrap-around edge is learned.
#[test]
fn strided_second_pass_prefetch_hits() {
    let mut model = reference();
    let pass: Vec<usize> = (0..10).map(|i| i * 2).collect();
    run(&mut model, &pass);

    // Second pass. Address 0 was evicted long ago (W = 5), so it misses and
    // learns 18 -> 0; row 0 already predicts 2, which was also evicted, so
    // the prefetch lands and address 2 arrives as a prefetch-hit.
    let events = run(&mut model, &pass);
    assert!(!events[0].hit);
    assert!(events[0].prefetch);
    assert_eq!(events[0].prefetch_address, Some(Addr::new(2)));
    for event in &events[1..] {
        assert!(
            event.prefetch_hit,
            "addr {} must be a prefetch-hit",
            event.address
        );
    }
}

// ══════════════════════════════════════════════════════════
// 4. Repeated pattern
// ══════════════════════════════════════════════════════════

/// The canonical repeated scenario, reference by reference.
#[test]
fn repeated_pattern_prefetch_chain() {
    let mut model = reference();
    let events = run(&mut model, &[0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);

    // First pass (indices 0-5): all misses, no prefetches; the table
    // accumulates 0->1 through 4->5 and the window ends as [1,2,3,4,5]
    // (0 was evicted by reference 5's demand insert).
    for event in &events[..6] {
        assert!(!event.hit);
        assert!(!event.prefetch);
    }

    // Index 6: address 0 was evicted, so it misses and learns 5->0.
    // Row 0 predicts 1, which reference 5's insert evicted as well, so a
    // prefetch for 1 is issued.
    assert!(!events[6].hit);
    assert!(events[6].prefetch);
    assert_eq!(events[6].prefetch_address, Some(Addr::new(1)));

    // Index 7: address 1 is resident with the prefetch tag, so this is a
    // prefetch-hit, and the chain continues: each reference prefetches its
    // learned successor.
    for (offset, event) in events[7..].iter().enumerate() {
        assert!(
            event.prefetch_hit,
            "index {} must be a prefetch-hit",
            7 + offset
        );
        assert!(event.prefetch);
        assert_eq!(
            event.prefetch_address,
            Some(Addr::new((events[7 + offset].address.val() + 1) % 6))
        );
    }

    // Learning happened on misses only: every learned edge has count 1.
    let table = model.table_snapshot();
    assert_eq!(table[5][0], 1);
    for i in 0..5 {
        assert_eq!(table[i][i + 1], 1);
    }
}

// ══════════════════════════════════════════════════════════
// 5. Interleaved pattern
// ══════════════════════════════════════════════════════════

/// Interleaved references learn the swapped edges; no prefetch ever targets
/// the current demand.
#[test]
fn interleaved_pattern_edges_and_self_prefetch() {
    let mut model = reference();
    let events = run(&mut model, &[1, 0, 3, 2, 5, 4, 7, 6, 9, 8]);

    for event in &events {
        if let Some(target) = event.prefetch_address {
            assert_ne!(target, event.address);
        }
        assert_event_invariants(event, 5);
    }

    let table = model.table_snapshot();
    assert_eq!(table[1][0], 1);
    assert_eq!(table[0][3], 1);
    assert_eq!(table[3][2], 1);
    assert_eq!(table[2][5], 1);
}

// ══════════════════════════════════════════════════════════
// 6. Immediate repeat and demand hits
// ══════════════════════════════════════════════════════════

/// The second of two identical references is a demand-hit and learns
/// nothing.
#[test]
fn immediate_repeat_is_demand_hit() {
    let mut model = reference();
    let first = model.access(Addr::new(7));
    let second = model.access(Addr::new(7));

    assert!(!first.hit);
    assert!(second.hit);
    assert!(second.demand_hit);
    assert!(!second.prefetch_hit);
    assert!(!second.prefetch);

    let table = model.table_snapshot();
    assert!(table.iter().flatten().all(|&c| c == 0), "hits never learn");
}

/// A working set that fits the window degenerates to pure demand-hits:
/// the second pass neither learns nor prefetches.
#[test]
fn resident_working_set_yields_demand_hits() {
    let mut model = reference();
    let pass = [0, 2, 4, 6, 8];
    run(&mut model, &pass);
    let events = run(&mut model, &pass);

    for event in &events {
        assert!(event.demand_hit, "addr {} must demand-hit", event.address);
        // The predicted successor is always resident, so no prefetch fires.
        assert!(!event.prefetch);
    }
    let table = model.table_snapshot();
    let total: u32 = table.iter().flatten().sum();
    assert_eq!(total, 4, "second pass must not add edges");
}

// ══════════════════════════════════════════════════════════
// 7. Window saturation
// ══════════════════════════════════════════════════════════

/// The (W+1)-th distinct demand evicts the oldest entry.
#[test]
fn window_saturation_evicts_oldest() {
    let mut model = reference();
    let events = run(&mut model, &[10, 11, 12, 13, 14, 15]);

    let last = events.last().unwrap();
    assert_eq!(last.history.len(), 5);
    let resident: Vec<usize> = last.history.iter().map(|e| e.address.val()).collect();
    assert_eq!(resident, vec![11, 12, 13, 14, 15]);
}

// ══════════════════════════════════════════════════════════
// 8. Reset semantics
// ══════════════════════════════════════════════════════════

/// Reset followed by a sequence replays exactly like a fresh instance.
#[test]
fn reset_equals_fresh_instance() {
    let sequence = [0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5];

    let mut recycled = reference();
    run(&mut recycled, &[9, 9, 3, 7, 9]);
    recycled.reset();
    let after_reset = run(&mut recycled, &sequence);

    let mut fresh = reference();
    let fresh_events = run(&mut fresh, &sequence);

    assert_eq!(after_reset, fresh_events);
}

// ══════════════════════════════════════════════════════════
// 9. Invariants under randomized load
// ══════════════════════════════════════════════════════════

/// Every invariant holds across a long seeded-random stream, and counters
/// respect a deliberately narrow width.
#[test]
fn random_stream_invariants_hold() {
    let mut model = MarkovPrefetcher::new(&predictor_config(16, 4, 1));
    let pattern = patterns::generate(
        &PatternConfig {
            kind: PatternKind::Random,
            length: 300,
            seed: 7,
            ..PatternConfig::default()
        },
        16,
    );

    for addr in pattern {
        let event = model.access(addr);
        assert_event_invariants(&event, 4);
    }

    // One-bit counters must clamp at 1 no matter how often an edge repeats.
    let table = model.table_snapshot();
    assert!(table.iter().flatten().all(|&c| c <= 1));
}

// ══════════════════════════════════════════════════════════
// 10. Boundaries
// ══════════════════════════════════════════════════════════

/// Out-of-universe references are a programming error.
#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_reference_panics() {
    let mut model = reference();
    model.access(Addr::new(32));
}
