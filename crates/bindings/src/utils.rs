//! Utility functions exposed to Python.
//!
//! Provides version and pattern-generation helpers for the
//! `markov_prefetcher` module.

use pyo3::prelude::*;

use crate::conversion::py_dict_to_config;

/// Returns the simulator version string (e.g., for scripting or
/// diagnostics).
///
/// # Returns
///
/// A version string such as `"0.1.0"`.
#[pyfunction]
pub fn version() -> String {
    "0.1.0".to_string()
}

/// Generates a synthetic reference stream from a configuration dict.
///
/// The `pattern` section selects the kind and parameters; addresses are
/// reduced into the configured universe.
///
/// # Arguments
///
/// * `py` - Python interpreter token.
/// * `config_dict` - A Python dictionary containing configuration
///   parameters.
///
/// # Returns
///
/// The generated addresses as a list of ints.
#[pyfunction]
pub fn generate_pattern(py: Python, config_dict: &Bound<'_, PyAny>) -> PyResult<Vec<usize>> {
    let config = py_dict_to_config(py, config_dict)?;
    let pattern = markov_core::patterns::generate(&config.pattern, config.predictor.address_space);
    Ok(pattern.iter().map(|a| a.val()).collect())
}
