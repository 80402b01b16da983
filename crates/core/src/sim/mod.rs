//! Simulation driver: trace ingestion and the run loop.
//!
//! This module hosts the pieces that feed address streams into the predictor
//! and account for the outcomes:
//! 1. **Loader:** Address-trace files from disk.
//! 2. **Simulator:** Owns a predictor model and its statistics; runs
//!    sequences and pretty-prints state.

/// Address-trace file loader.
pub mod loader;
/// Run loop and state dumping.
pub mod simulator;

pub use self::simulator::Simulator;
