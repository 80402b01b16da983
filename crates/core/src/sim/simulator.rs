//! Simulator: owns the predictor model and its statistics side-by-side.
//!
//! The model is held behind the [`Predictor`] trait so the reference and
//! staged implementations (and test doubles) are interchangeable; the
//! simulator itself only sequences references, accounts outcomes, and
//! renders state.

use log::debug;

use crate::common::Addr;
use crate::config::{Config, Model};
use crate::predictor::{AccessTag, MarkovPrefetcher, Predictor, PrefetchEvent, PrefetcherFsm};
use crate::stats::SimStats;

/// Top-level simulator: predictor model + statistics.
pub struct Simulator {
    /// Predictor implementation (reference or staged).
    model: Box<dyn Predictor>,
    /// Aggregated run statistics.
    pub stats: SimStats,
    /// Print one line per processed reference.
    trace: bool,
}

impl Simulator {
    /// Creates a new simulator with the model selected by the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration.
    pub fn new(config: &Config) -> Self {
        let model: Box<dyn Predictor> = match config.general.model {
            Model::Reference => Box::new(MarkovPrefetcher::new(&config.predictor)),
            Model::Staged => Box::new(PrefetcherFsm::new(&config.predictor)),
        };
        Self::with_predictor(model, config.general.trace_references)
    }

    /// Creates a simulator around an explicit predictor implementation.
    ///
    /// # Arguments
    ///
    /// * `model` - The predictor to drive.
    /// * `trace` - Print one line per processed reference.
    pub fn with_predictor(model: Box<dyn Predictor>, trace: bool) -> Self {
        Self {
            model,
            stats: SimStats::default(),
            trace,
        }
    }

    /// Processes one demand reference and accounts its outcome.
    ///
    /// # Arguments
    ///
    /// * `address` - The referenced address.
    ///
    /// # Returns
    ///
    /// The outcome event produced by the model.
    pub fn step(&mut self, address: Addr) -> PrefetchEvent {
        let index = self.stats.references;
        let event = self.model.access(address);
        self.stats.record(&event);
        if self.trace {
            println!("{}", format_event(index, &event));
        }
        event
    }

    /// Processes a whole reference stream in order.
    ///
    /// # Arguments
    ///
    /// * `sequence` - The reference stream.
    ///
    /// # Returns
    ///
    /// The outcome events, one per input reference.
    pub fn run(&mut self, sequence: &[Addr]) -> Vec<PrefetchEvent> {
        debug!("running {} references", sequence.len());
        sequence.iter().map(|&addr| self.step(addr)).collect()
    }

    /// Resets the model and clears the statistics.
    pub fn reset(&mut self) {
        self.model.reset();
        self.stats = SimStats::default();
    }

    /// Returns a copy of the model's history window.
    pub fn history_snapshot(&self) -> Vec<crate::predictor::HistoryEntry> {
        self.model.history_snapshot()
    }

    /// Returns a copy of the model's transition matrix.
    pub fn table_snapshot(&self) -> Vec<Vec<u32>> {
        self.model.table_snapshot()
    }

    /// Pretty-prints the history window and the nonzero transition counters.
    pub fn dump_state(&self) {
        println!("\n---------------- ACCESS HISTORY (old -> new) -------------");
        let history = self.model.history_snapshot();
        if history.is_empty() {
            println!("  (empty)");
        }
        for (slot, entry) in history.iter().enumerate() {
            println!(
                "  [{}] addr {:>3}  {:<8}  ts {}",
                slot,
                entry.address,
                match entry.tag {
                    AccessTag::Demand => "demand",
                    AccessTag::Prefetch => "prefetch",
                },
                entry.timestamp
            );
        }

        println!("---------------- TRANSITION TABLE (nonzero) --------------");
        let table = self.model.table_snapshot();
        let mut any = false;
        for (row, counts) in table.iter().enumerate() {
            for (col, &count) in counts.iter().enumerate() {
                if count > 0 {
                    println!("  {:>3} -> {:>3}  x{}", row, col, count);
                    any = true;
                }
            }
        }
        if !any {
            println!("  (empty)");
        }
        println!("----------------------------------------------------------");
    }
}

/// Renders one outcome event as a single trace line.
fn format_event(index: u64, event: &PrefetchEvent) -> String {
    let class = if event.prefetch_hit {
        "prefetch-hit"
    } else if event.demand_hit {
        "demand-hit"
    } else {
        "miss"
    };
    let issued = match event.prefetch_address {
        Some(target) => format!("  prefetch -> {}", target),
        None => String::new(),
    };
    format!(
        "[{:>5}] addr {:>3}  {:<12}{}",
        index, event.address, class, issued
    )
}
