//! Markov prefetcher decision engine.
//!
//! This module contains the predictor's learning and decision structures and
//! its two interchangeable execution models:
//! 1. **Transition table:** First-order Markov counters over the bounded
//!    address universe.
//! 2. **Access history:** Dedup FIFO window with demand/prefetch tagging.
//! 3. **Reference model:** One externally observable result per input
//!    address.
//! 4. **Staged model:** A six-state sequencer producing the same results in
//!    fixed micro-steps, suitable for pipelined hardware realization.

/// Sequential reference model.
pub mod engine;
/// Bounded recency window with demand/prefetch tagging.
pub mod history;
/// Staged six-state sequencer.
pub mod fsm;
/// First-order Markov transition table.
pub mod table;

pub use self::engine::MarkovPrefetcher;
pub use self::fsm::{FsmProbe, FsmState, PrefetcherFsm};
pub use self::history::{AccessHistory, AccessTag, HistoryEntry};
pub use self::table::TransitionTable;

use crate::common::Addr;

/// Per-reference outcome reported by either execution model.
///
/// `hit` is the disjunction of the two hit kinds, which are mutually
/// exclusive. `prefetch_address` is populated iff `prefetch` is true.
/// `history` is the window snapshot after all updates for this reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefetchEvent {
    /// The demand address that produced this event.
    pub address: Addr,
    /// The address was resident in the history window.
    pub hit: bool,
    /// The resident entry was tagged `Prefetch` (now promoted).
    pub prefetch_hit: bool,
    /// The resident entry was tagged `Demand`.
    pub demand_hit: bool,
    /// A speculative prefetch was issued this reference.
    pub prefetch: bool,
    /// The issued prefetch target; `Some` iff `prefetch` is true.
    pub prefetch_address: Option<Addr>,
    /// History window after all updates for this reference.
    pub history: Vec<HistoryEntry>,
}

/// Trait for prefetch-predictor execution models.
///
/// Both the sequential reference model and the staged state machine present
/// this surface; the simulator drives either one through it. Snapshot
/// accessors are read-only observability views and must not alias mutable
/// predictor state.
pub trait Predictor {
    /// Processes one demand reference and returns its outcome event.
    ///
    /// # Arguments
    ///
    /// * `address` - The referenced address; must lie inside the universe.
    fn access(&mut self, address: Addr) -> PrefetchEvent;

    /// Restores the model to its post-construction state.
    fn reset(&mut self);

    /// Returns a copy of the history window in insertion order.
    fn history_snapshot(&self) -> Vec<HistoryEntry>;

    /// Returns a copy of the transition matrix, one inner vector per row.
    fn table_snapshot(&self) -> Vec<Vec<u32>>;
}
