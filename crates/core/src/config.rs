//! Configuration system for the Markov prefetcher simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize the simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (address space, history
//!    window, counter width, pattern parameters).
//! 2. **Structures:** Hierarchical config for general, predictor, and pattern
//!    settings.
//! 3. **Enums:** Execution model and access-pattern kinds.
//!
//! Configuration is supplied via JSON from the Python API or use
//! `Config::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline predictor configuration when not
/// explicitly overridden.
mod defaults {
    /// Address-space size `N` (5-bit addresses).
    ///
    /// Every reference and every prefetch target lies in `[0, N)`; the
    /// transition table is `N x N`.
    pub const ADDRESS_SPACE: usize = 32;

    /// Access-history window size `W`.
    ///
    /// The history holds at most this many distinct addresses between
    /// reference boundaries.
    pub const HISTORY_WINDOW: usize = 5;

    /// Transition-counter width `B` in bits.
    ///
    /// Counters saturate at `2^B - 1` (255 for the default width).
    pub const COUNTER_BITS: u32 = 8;

    /// Default generated pattern length in references.
    pub const PATTERN_LENGTH: usize = 32;

    /// Default stride for the strided pattern.
    pub const PATTERN_STRIDE: usize = 2;

    /// Default period for the repeated pattern (addresses `0..PERIOD`
    /// replayed until the length is reached).
    pub const PATTERN_PERIOD: usize = 6;

    /// Default seed for the random pattern's xorshift generator.
    pub const PATTERN_SEED: u64 = 123456789;
}

/// Execution model selection.
///
/// Both models implement identical externally observable semantics; the
/// staged model additionally exposes the micro-step sequencer for
/// cycle-by-cycle introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Model {
    /// Sequential reference model: one result per input address.
    #[default]
    Reference,
    /// Staged state-machine model: six micro-steps per input address.
    Staged,
}

/// Synthetic access-pattern kinds for the built-in pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PatternKind {
    /// Consecutive addresses: 0, 1, 2, ...
    #[default]
    Sequential,
    /// Constant-stride addresses: 0, s, 2s, ...
    Strided,
    /// Pairwise-swapped sequential addresses: 1, 0, 3, 2, ...
    Interleaved,
    /// Seeded xorshift-uniform addresses over the universe.
    Random,
    /// A short sequential prefix replayed until the length is reached.
    Repeated,
}

/// Root configuration structure containing all simulator settings.
///
/// Configuration is supplied by the Python API (dict → JSON) or use
/// `Config::default()` for the CLI.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use markov_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.predictor.address_space, 32);
/// assert_eq!(config.predictor.history_window, 5);
/// ```
///
/// Deserializing from JSON (typical Python API usage):
///
/// ```
/// use markov_core::config::{Config, Model, PatternKind};
///
/// let json = r#"{
///     "general": {
///         "trace_references": true,
///         "model": "Staged"
///     },
///     "predictor": {
///         "address_space": 64,
///         "history_window": 8,
///         "counter_bits": 4
///     },
///     "pattern": {
///         "kind": "Strided",
///         "length": 20,
///         "stride": 2,
///         "period": 6,
///         "seed": 42
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.model, Model::Staged);
/// assert_eq!(config.predictor.address_space, 64);
/// assert_eq!(config.pattern.kind, PatternKind::Strided);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Predictor sizing parameters
    #[serde(default)]
    pub predictor: PredictorConfig,
    /// Built-in pattern generator settings
    #[serde(default)]
    pub pattern: PatternConfig,
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print one human-readable line per processed reference.
    #[serde(default)]
    pub trace_references: bool,

    /// Execution model to drive (reference or staged).
    #[serde(default)]
    pub model: Model,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_references: false,
            model: Model::default(),
        }
    }
}

/// Predictor sizing parameters.
///
/// All three parameters are fixed at construction time; the structures they
/// size are allocated once and live for the lifetime of the predictor
/// instance.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Address-space size `N`; references must lie in `[0, N)`.
    #[serde(default = "PredictorConfig::default_address_space")]
    pub address_space: usize,

    /// History window size `W` (maximum tracked addresses).
    #[serde(default = "PredictorConfig::default_history_window")]
    pub history_window: usize,

    /// Transition-counter width `B` in bits; counters saturate at `2^B - 1`.
    #[serde(default = "PredictorConfig::default_counter_bits")]
    pub counter_bits: u32,
}

impl PredictorConfig {
    /// Returns the default address-space size.
    fn default_address_space() -> usize {
        defaults::ADDRESS_SPACE
    }

    /// Returns the default history window size.
    fn default_history_window() -> usize {
        defaults::HISTORY_WINDOW
    }

    /// Returns the default counter width in bits.
    fn default_counter_bits() -> u32 {
        defaults::COUNTER_BITS
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            address_space: defaults::ADDRESS_SPACE,
            history_window: defaults::HISTORY_WINDOW,
            counter_bits: defaults::COUNTER_BITS,
        }
    }
}

/// Built-in pattern generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    /// Pattern kind to generate.
    #[serde(default)]
    pub kind: PatternKind,

    /// Number of references to generate.
    #[serde(default = "PatternConfig::default_length")]
    pub length: usize,

    /// Stride for the strided pattern.
    #[serde(default = "PatternConfig::default_stride")]
    pub stride: usize,

    /// Period for the repeated pattern.
    #[serde(default = "PatternConfig::default_period")]
    pub period: usize,

    /// Seed for the random pattern.
    #[serde(default = "PatternConfig::default_seed")]
    pub seed: u64,
}

impl PatternConfig {
    /// Returns the default pattern length.
    fn default_length() -> usize {
        defaults::PATTERN_LENGTH
    }

    /// Returns the default stride.
    fn default_stride() -> usize {
        defaults::PATTERN_STRIDE
    }

    /// Returns the default period.
    fn default_period() -> usize {
        defaults::PATTERN_PERIOD
    }

    /// Returns the default random seed.
    fn default_seed() -> u64 {
        defaults::PATTERN_SEED
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            kind: PatternKind::default(),
            length: defaults::PATTERN_LENGTH,
            stride: defaults::PATTERN_STRIDE,
            period: defaults::PATTERN_PERIOD,
            seed: defaults::PATTERN_SEED,
        }
    }
}
