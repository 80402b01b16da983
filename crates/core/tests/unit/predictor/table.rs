//! Transition Table Tests.
//!
//! Verifies that the transition table counts observed transitions, answers
//! most-probable-successor queries with the deterministic lowest-index
//! tie-break, and saturates counters at the configured width.

use markov_core::common::Addr;
use markov_core::predictor::TransitionTable;

// ══════════════════════════════════════════════════════════
// 1. Empty table — no prediction
// ══════════════════════════════════════════════════════════

/// An unobserved row yields no successor.
#[test]
fn empty_row_has_no_successor() {
    let table = TransitionTable::new(32, 8);
    assert_eq!(table.most_probable_successor(Addr::new(0)), None);
    assert_eq!(table.most_probable_successor(Addr::new(31)), None);
}

// ══════════════════════════════════════════════════════════
// 2. Learning and querying
// ══════════════════════════════════════════════════════════

/// A single observed transition becomes the most probable successor.
#[test]
fn observe_then_query() {
    let mut table = TransitionTable::new(32, 8);
    table.observe(Addr::new(4), Addr::new(9));
    assert_eq!(table.count(Addr::new(4), Addr::new(9)), 1);
    assert_eq!(
        table.most_probable_successor(Addr::new(4)),
        Some(Addr::new(9))
    );
    // Other rows stay unobserved.
    assert_eq!(table.most_probable_successor(Addr::new(9)), None);
}

/// The heavier edge wins the query.
#[test]
fn heavier_edge_wins() {
    let mut table = TransitionTable::new(32, 8);
    table.observe(Addr::new(2), Addr::new(7));
    table.observe(Addr::new(2), Addr::new(11));
    table.observe(Addr::new(2), Addr::new(11));
    assert_eq!(
        table.most_probable_successor(Addr::new(2)),
        Some(Addr::new(11))
    );
}

// ══════════════════════════════════════════════════════════
// 3. Tie-break — lowest index wins
// ══════════════════════════════════════════════════════════

/// Equal counts resolve to the lowest column index.
#[test]
fn tie_break_prefers_lowest_index() {
    let mut table = TransitionTable::new(32, 8);
    // TT[0][3] = TT[0][7] = 5, all other cells of row 0 zero.
    for _ in 0..5 {
        table.observe(Addr::new(0), Addr::new(3));
        table.observe(Addr::new(0), Addr::new(7));
    }
    assert_eq!(table.count(Addr::new(0), Addr::new(3)), 5);
    assert_eq!(table.count(Addr::new(0), Addr::new(7)), 5);
    assert_eq!(
        table.most_probable_successor(Addr::new(0)),
        Some(Addr::new(3)),
        "lowest index must win the tie"
    );
}

/// Tie-break holds regardless of observation order.
#[test]
fn tie_break_ignores_observation_order() {
    let mut table = TransitionTable::new(32, 8);
    for _ in 0..5 {
        table.observe(Addr::new(0), Addr::new(7));
    }
    for _ in 0..5 {
        table.observe(Addr::new(0), Addr::new(3));
    }
    assert_eq!(
        table.most_probable_successor(Addr::new(0)),
        Some(Addr::new(3))
    );
}

// ══════════════════════════════════════════════════════════
// 4. Saturation
// ══════════════════════════════════════════════════════════

/// An 8-bit counter clamps at 255 and stays there.
#[test]
fn counter_saturates_at_width() {
    let mut table = TransitionTable::new(32, 8);
    assert_eq!(table.max_count(), 255);
    for _ in 0..300 {
        table.observe(Addr::new(1), Addr::new(2));
    }
    assert_eq!(table.count(Addr::new(1), Addr::new(2)), 255);
    // Saturated observations must not disturb any other cell.
    let snapshot = table.snapshot();
    for (row, counts) in snapshot.iter().enumerate() {
        for (col, &count) in counts.iter().enumerate() {
            if (row, col) != (1, 2) {
                assert_eq!(count, 0, "cell ({}, {}) must stay zero", row, col);
            }
        }
    }
}

/// Narrow counters saturate correspondingly early.
#[test]
fn narrow_counter_width() {
    let mut table = TransitionTable::new(8, 2);
    assert_eq!(table.max_count(), 3);
    for _ in 0..10 {
        table.observe(Addr::new(0), Addr::new(1));
    }
    assert_eq!(table.count(Addr::new(0), Addr::new(1)), 3);
}

// ══════════════════════════════════════════════════════════
// 5. Reset and boundaries
// ══════════════════════════════════════════════════════════

/// Reset clears every counter.
#[test]
fn reset_clears_counters() {
    let mut table = TransitionTable::new(16, 8);
    table.observe(Addr::new(3), Addr::new(4));
    table.reset();
    assert_eq!(table.count(Addr::new(3), Addr::new(4)), 0);
    assert_eq!(table.most_probable_successor(Addr::new(3)), None);
}

/// Zero-sized address space is a programming error.
#[test]
#[should_panic(expected = "address space must be nonzero")]
fn zero_address_space_panics() {
    let _ = TransitionTable::new(0, 8);
}

/// Zero-width counters are a programming error.
#[test]
#[should_panic(expected = "counter width")]
fn zero_counter_width_panics() {
    let _ = TransitionTable::new(32, 0);
}

/// Out-of-universe observation is a programming error.
#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_observe_panics() {
    let mut table = TransitionTable::new(32, 8);
    table.observe(Addr::new(32), Addr::new(0));
}
