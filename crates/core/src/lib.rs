//! Markov prefetcher library.
//!
//! This crate implements a hardware-style Markov address predictor with the
//! following:
//! 1. **Predictor:** First-order transition table, tagged recency window,
//!    and the per-reference decision logic.
//! 2. **Models:** A sequential reference model and a staged six-state
//!    sequencer with identical externally observable behaviour.
//! 3. **Simulation:** Pattern generation, trace loading, a run loop, and
//!    statistics collection.
//!
//! The predictor only decides: it observes a stream of demand addresses and
//! emits at most one speculative prefetch per reference. Delivery of
//! prefetched data is the caller's concern.

/// Common types (addresses, errors).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Synthetic address-pattern generation.
pub mod patterns;
/// Predictor core (table, history, reference model, staged model).
pub mod predictor;
/// Trace loading and the run loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Sequential reference model; one event per call.
pub use crate::predictor::MarkovPrefetcher;
/// Staged six-state model; six micro-steps per reference.
pub use crate::predictor::PrefetcherFsm;
/// Model seam shared by both implementations.
pub use crate::predictor::{Predictor, PrefetchEvent};
/// Run-loop driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
