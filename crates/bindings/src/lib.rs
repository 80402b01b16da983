//! Python bindings for the Markov prefetcher simulator.
//!
//! This crate exposes the predictor to Python via PyO3. It provides:
//! 1. **Simulator:** `PySimulator` for configuration, reference stepping, and
//!    whole-stream runs.
//! 2. **Sequencer:** `PyPrefetcherFsm` for micro-step driving and the full
//!    observability surface of the staged model.
//! 3. **Statistics:** `PyStats` for run metrics and selective section
//!    printing.
//! 4. **Utilities:** Version string and conversion helpers for Python↔Rust
//!    types.

use pyo3::prelude::*;

/// Python dict to Rust `Config` conversion.
pub mod conversion;
/// Staged sequencer binding (`PyPrefetcherFsm`).
pub mod fsm;
/// Simulator binding (`PySimulator`).
pub mod simulator;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (e.g., version).
pub mod utils;

/// Registers all prefetcher classes and functions onto the given Python
/// module.
///
/// Called from the `#[pymodule]` entry point to expose `PySimulator`,
/// `PyPrefetcherFsm`, `PyStats`, and `version`.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_prefetcher_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<simulator::PySimulator>()?;
    m.add_class::<fsm::PyPrefetcherFsm>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::generate_pattern, m)?)?;

    Ok(())
}

#[pymodule]
fn markov_prefetcher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_prefetcher_module(m)?;
    Ok(())
}
