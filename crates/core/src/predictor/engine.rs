//! Sequential reference model.
//!
//! Processes one demand reference per call, performing the full classify /
//! learn / update / predict sequence in a single step. The staged state
//! machine in [`super::fsm`] performs the same sequence spread over six
//! micro-steps; for any input stream the two produce identical event
//! streams.
//!
//! Per-reference order (load-bearing):
//! 1. Hit detection against the history window, promoting a prefetch-tagged
//!    entry to demand in place.
//! 2. Learning: on a miss with a valid previous address, bump the
//!    `prev -> curr` transition counter.
//! 3. Unconditional demand insert of `curr` (dedup moves a resident entry to
//!    the tail).
//! 4. Successor query for `curr`; insert the predicted address as a prefetch
//!    iff it is not already resident. The demand insert precedes this check,
//!    so the predictor never prefetches the address it just observed.
//! 5. Latch `prev = curr`.
//!
//! Learning happens on misses only; repeated demand hits do not reinforce
//! edges, and a predicted edge that lands is not double-counted.

use crate::common::Addr;
use crate::config::PredictorConfig;

use super::history::{AccessHistory, AccessTag, HistoryEntry};
use super::table::TransitionTable;
use super::{Predictor, PrefetchEvent};

/// Sequential Markov prefetcher state.
pub struct MarkovPrefetcher {
    /// Transition counters.
    table: TransitionTable,
    /// Recency window.
    history: AccessHistory,
    /// Previous demand address; `None` until the first reference completes.
    prev: Option<Addr>,
    /// Count of completed references; doubles as the insertion timestamp.
    references: u64,
}

impl MarkovPrefetcher {
    /// Creates a new prefetcher sized by the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Predictor sizing (`N`, `W`, `B`).
    ///
    /// # Panics
    ///
    /// Panics if any parameter is out of range (see [`TransitionTable::new`]
    /// and [`AccessHistory::new`]).
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            table: TransitionTable::new(config.address_space, config.counter_bits),
            history: AccessHistory::new(config.history_window),
            prev: None,
            references: 0,
        }
    }

    /// Returns the transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Returns the history window.
    pub fn history(&self) -> &AccessHistory {
        &self.history
    }

    /// Returns the previous demand address, if one has been latched.
    pub fn prev(&self) -> Option<Addr> {
        self.prev
    }

    /// Returns the number of completed references.
    pub fn references(&self) -> u64 {
        self.references
    }
}

impl Predictor for MarkovPrefetcher {
    /// Processes one demand reference in a single step.
    ///
    /// # Arguments
    ///
    /// * `address` - The referenced address.
    ///
    /// # Returns
    ///
    /// The outcome event, including the post-update history snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `address` lies outside the universe.
    fn access(&mut self, address: Addr) -> PrefetchEvent {
        assert!(
            address.in_space(self.table.size()),
            "reference address out of range"
        );
        let timestamp = self.references;

        let (hit, prefetch_hit, demand_hit) = match self.history.find_tag(address) {
            Some(AccessTag::Prefetch) => {
                self.history.promote_to_demand(address);
                (true, true, false)
            }
            Some(AccessTag::Demand) => (true, false, true),
            None => (false, false, false),
        };

        if !hit {
            if let Some(prev) = self.prev {
                self.table.observe(prev, address);
            }
        }

        self.history.insert_demand(address, timestamp);

        let predicted = self.table.most_probable_successor(address);
        let mut prefetch = false;
        let mut prefetch_address = None;
        if let Some(target) = predicted {
            if !self.history.contains(target) {
                self.history.insert_prefetch(target, timestamp);
                prefetch = true;
                prefetch_address = Some(target);
            }
        }

        self.prev = Some(address);
        self.references += 1;

        PrefetchEvent {
            address,
            hit,
            prefetch_hit,
            demand_hit,
            prefetch,
            prefetch_address,
            history: self.history.snapshot(),
        }
    }

    /// Clears the table, the window, the previous-address latch, and the
    /// reference count. A reset instance behaves identically to a fresh one.
    fn reset(&mut self) {
        self.table.reset();
        self.history.reset();
        self.prev = None;
        self.references = 0;
    }

    fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    fn table_snapshot(&self) -> Vec<Vec<u32>> {
        self.table.snapshot()
    }
}
