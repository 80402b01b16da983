//! Staged six-state sequencer.
//!
//! Hardware-style realization of the prefetcher: one input reference is
//! processed by a fixed traversal of six states, driven one micro-step at a
//! time by an external clock. Register updates for a state's work latch as
//! the machine advances out of that state, so the results of each phase
//! become visible in the following state's probe.
//!
//! Outputs for the current reference are only guaranteed valid in
//! `ReportResult`; earlier states may expose intermediate values for
//! debugging but are not part of the observable contract. For any input
//! stream, the events sampled in `ReportResult` equal the events produced by
//! the sequential reference model.
//!
//! The machine never stalls: every presented reference completes in exactly
//! six micro-steps. An in-flight reference cannot be aborted; the caller
//! either completes the traversal or discards the instance via `reset`.

use crate::common::Addr;
use crate::config::PredictorConfig;

use super::history::{AccessHistory, AccessTag, HistoryEntry};
use super::table::TransitionTable;
use super::{Predictor, PrefetchEvent};

/// Sequencer states, one full traversal per input reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FsmState {
    /// Waiting for an input address.
    Idle,
    /// Scanning the history window for the latched address.
    FindHit,
    /// Learning the transition and inserting the demand entry.
    UpdateHistory1,
    /// Computing the most probable successor.
    FindMostProbable,
    /// Inserting the speculative entry and setting prefetch outputs.
    UpdateHistory2,
    /// Outputs stable; caller samples them.
    ReportResult,
}

impl FsmState {
    /// Returns the state index (0..=5) in traversal order.
    pub fn index(self) -> u8 {
        match self {
            FsmState::Idle => 0,
            FsmState::FindHit => 1,
            FsmState::UpdateHistory1 => 2,
            FsmState::FindMostProbable => 3,
            FsmState::UpdateHistory2 => 4,
            FsmState::ReportResult => 5,
        }
    }

    /// Returns the state name for display and scripting.
    pub fn name(self) -> &'static str {
        match self {
            FsmState::Idle => "Idle",
            FsmState::FindHit => "FindHit",
            FsmState::UpdateHistory1 => "UpdateHistory1",
            FsmState::FindMostProbable => "FindMostProbable",
            FsmState::UpdateHistory2 => "UpdateHistory2",
            FsmState::ReportResult => "ReportResult",
        }
    }
}

/// Introspection view of the sequencer, sampled between micro-steps.
///
/// `history` has one lane per window slot (`W` lanes); unoccupied lanes are
/// `None`. All fields are copies and do not alias live state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsmProbe {
    /// Current state.
    pub state: FsmState,
    /// Micro-steps executed since construction or reset.
    pub cycle: u64,
    /// Latched input address, if a reference is in flight.
    pub address: Option<Addr>,
    /// Previous-address latch.
    pub prev: Option<Addr>,
    /// Most-probable-next address computed for the in-flight reference.
    pub predicted: Option<Addr>,
    /// The predicted address was already resident when computed.
    pub predicted_in_history: bool,
    /// History lanes, insertion order, padded to the window size.
    pub history: Vec<Option<HistoryEntry>>,
    /// Full transition matrix.
    pub table: Vec<Vec<u32>>,
}

/// Staged prefetcher state.
pub struct PrefetcherFsm {
    /// Transition counters.
    table: TransitionTable,
    /// Recency window.
    history: AccessHistory,
    /// Current state.
    state: FsmState,
    /// Micro-step counter; increments once per `step`, idle ticks included.
    cycles: u64,
    /// Count of completed references; doubles as the insertion timestamp.
    references: u64,
    /// Previous demand address latch.
    prev: Option<Addr>,
    /// Address presented by the caller, consumed on the next idle step.
    pending: Option<Addr>,
    /// Latched input address for the in-flight reference.
    curr: Option<Addr>,
    /// Insertion timestamp for the in-flight reference.
    timestamp: u64,
    /// Hit classification registers.
    hit: bool,
    prefetch_hit: bool,
    demand_hit: bool,
    /// Prediction registers.
    predicted: Option<Addr>,
    predicted_in_history: bool,
    /// Event latched on entry to `ReportResult`, cleared on exit.
    output: Option<PrefetchEvent>,
}

impl PrefetcherFsm {
    /// Creates a new sequencer in `Idle`, sized by the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Predictor sizing (`N`, `W`, `B`).
    ///
    /// # Panics
    ///
    /// Panics if any parameter is out of range.
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            table: TransitionTable::new(config.address_space, config.counter_bits),
            history: AccessHistory::new(config.history_window),
            state: FsmState::Idle,
            cycles: 0,
            references: 0,
            prev: None,
            pending: None,
            curr: None,
            timestamp: 0,
            hit: false,
            prefetch_hit: false,
            demand_hit: false,
            predicted: None,
            predicted_in_history: false,
            output: None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Returns the micro-step counter.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of completed references.
    pub fn references(&self) -> u64 {
        self.references
    }

    /// Presents an input address to be latched on the next idle step.
    ///
    /// # Arguments
    ///
    /// * `address` - The referenced address; must lie inside the universe.
    ///
    /// # Panics
    ///
    /// Panics if the address is out of range or a reference is in flight.
    pub fn present(&mut self, address: Addr) {
        assert!(
            address.in_space(self.table.size()),
            "reference address out of range"
        );
        assert!(
            self.state == FsmState::Idle,
            "reference already in flight; step to Idle first"
        );
        self.pending = Some(address);
    }

    /// Advances the machine by one micro-step.
    ///
    /// In `Idle` with no pending address this is a no-op tick; the cycle
    /// counter still advances.
    pub fn step(&mut self) {
        self.cycles += 1;

        match self.state {
            FsmState::Idle => {
                if let Some(address) = self.pending.take() {
                    self.curr = Some(address);
                    self.timestamp = self.references;
                    self.hit = false;
                    self.prefetch_hit = false;
                    self.demand_hit = false;
                    self.predicted = None;
                    self.predicted_in_history = false;
                    self.state = FsmState::FindHit;
                }
            }
            FsmState::FindHit => {
                let curr = self.curr_latched();
                match self.history.find_tag(curr) {
                    Some(AccessTag::Prefetch) => {
                        self.history.promote_to_demand(curr);
                        self.hit = true;
                        self.prefetch_hit = true;
                    }
                    Some(AccessTag::Demand) => {
                        self.hit = true;
                        self.demand_hit = true;
                    }
                    None => {}
                }
                self.state = FsmState::UpdateHistory1;
            }
            FsmState::UpdateHistory1 => {
                let curr = self.curr_latched();
                if !self.hit {
                    if let Some(prev) = self.prev {
                        self.table.observe(prev, curr);
                    }
                }
                self.history.insert_demand(curr, self.timestamp);
                self.state = FsmState::FindMostProbable;
            }
            FsmState::FindMostProbable => {
                let curr = self.curr_latched();
                self.predicted = self.table.most_probable_successor(curr);
                self.predicted_in_history = match self.predicted {
                    Some(target) => self.history.contains(target),
                    None => false,
                };
                self.state = FsmState::UpdateHistory2;
            }
            FsmState::UpdateHistory2 => {
                let mut prefetch = false;
                let mut prefetch_address = None;
                if let Some(target) = self.predicted {
                    if !self.predicted_in_history {
                        self.history.insert_prefetch(target, self.timestamp);
                        prefetch = true;
                        prefetch_address = Some(target);
                    }
                }
                self.output = Some(PrefetchEvent {
                    address: self.curr_latched(),
                    hit: self.hit,
                    prefetch_hit: self.prefetch_hit,
                    demand_hit: self.demand_hit,
                    prefetch,
                    prefetch_address,
                    history: self.history.snapshot(),
                });
                self.state = FsmState::ReportResult;
            }
            FsmState::ReportResult => {
                self.prev = self.curr;
                self.curr = None;
                self.references += 1;
                self.output = None;
                self.state = FsmState::Idle;
            }
        }
    }

    /// Returns the event for the in-flight reference.
    ///
    /// `Some` only while the machine is in `ReportResult`.
    pub fn output(&self) -> Option<&PrefetchEvent> {
        self.output.as_ref()
    }

    /// Returns the full introspection view of the machine.
    pub fn probe(&self) -> FsmProbe {
        let mut lanes: Vec<Option<HistoryEntry>> =
            self.history.snapshot().into_iter().map(Some).collect();
        lanes.resize(self.history.capacity(), None);

        FsmProbe {
            state: self.state,
            cycle: self.cycles,
            address: self.curr,
            prev: self.prev,
            predicted: self.predicted,
            predicted_in_history: self.predicted_in_history,
            history: lanes,
            table: self.table.snapshot(),
        }
    }

    /// Returns the latched input address.
    ///
    /// Every non-idle state holds a latched address; the traversal cannot
    /// reach them otherwise.
    fn curr_latched(&self) -> Addr {
        match self.curr {
            Some(address) => address,
            None => unreachable!("non-idle state without a latched address"),
        }
    }
}

impl Predictor for PrefetcherFsm {
    /// Processes one reference by driving a full six-step traversal.
    ///
    /// Samples the outputs in `ReportResult` and returns the machine to
    /// `Idle`.
    ///
    /// # Panics
    ///
    /// Panics if the address is out of range or a reference is in flight.
    fn access(&mut self, address: Addr) -> PrefetchEvent {
        self.present(address);
        for _ in 0..5 {
            self.step();
        }
        let event = match self.output.clone() {
            Some(event) => event,
            None => unreachable!("outputs are stable in ReportResult"),
        };
        self.step();
        event
    }

    /// Discards any in-flight reference and restores the post-construction
    /// state, including the cycle counter.
    fn reset(&mut self) {
        self.table.reset();
        self.history.reset();
        self.state = FsmState::Idle;
        self.cycles = 0;
        self.references = 0;
        self.prev = None;
        self.pending = None;
        self.curr = None;
        self.timestamp = 0;
        self.hit = false;
        self.prefetch_hit = false;
        self.demand_hit = false;
        self.predicted = None;
        self.predicted_in_history = false;
        self.output = None;
    }

    fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    fn table_snapshot(&self) -> Vec<Vec<u32>> {
        self.table.snapshot()
    }
}
