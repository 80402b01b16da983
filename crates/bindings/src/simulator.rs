//! Simulator Python binding.
//!
//! Exposes the run loop to Python: create from a config dict, process
//! references one at a time or as a whole stream, and retrieve statistics
//! and state snapshots.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use markov_core::common::Addr;
use markov_core::sim::Simulator;

use crate::conversion::{event_to_dict, history_to_list, py_dict_to_config};
use crate::stats::PyStats;

/// Python-exposed simulator: wraps the run loop for stepping and running
/// from Python.
#[pyclass(unsendable)]
pub struct PySimulator {
    pub inner: Simulator,
    address_space: usize,
}

#[pymethods]
impl PySimulator {
    /// Creates a new simulator instance.
    ///
    /// The execution model (reference or staged) and the predictor sizing
    /// are taken from the configuration dict.
    ///
    /// # Arguments
    /// * `py` - Python interpreter token.
    /// * `config_dict` - A Python dictionary containing configuration
    ///   parameters.
    ///
    /// # Errors
    /// Returns a `PyValueError` if the configuration dict is invalid.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => markov_core::Config::default(),
        };
        let address_space = config.predictor.address_space;

        Ok(PySimulator {
            inner: Simulator::new(&config),
            address_space,
        })
    }

    /// Processes one demand reference.
    ///
    /// # Arguments
    /// * `address` - The referenced address; must lie in `[0, N)`.
    ///
    /// # Returns
    ///
    /// The outcome event as a dict (`address`, `hit`, `prefetch_hit`,
    /// `demand_hit`, `prefetch`, `prefetch_address`, `history`).
    ///
    /// # Errors
    /// Returns a `PyValueError` if the address is outside the universe.
    pub fn access(&mut self, py: Python, address: usize) -> PyResult<Py<PyDict>> {
        self.check_address(address)?;
        let event = self.inner.step(Addr::new(address));
        Ok(event_to_dict(py, &event)?.into())
    }

    /// Processes a whole reference stream in order.
    ///
    /// # Arguments
    /// * `addresses` - The reference stream.
    ///
    /// # Returns
    ///
    /// One outcome dict per input reference.
    pub fn run(&mut self, py: Python, addresses: Vec<usize>) -> PyResult<Py<PyList>> {
        for &address in &addresses {
            self.check_address(address)?;
        }
        let events = addresses
            .iter()
            .map(|&address| self.inner.step(Addr::new(address)))
            .collect::<Vec<_>>();
        let dicts = events
            .iter()
            .map(|event| event_to_dict(py, event))
            .collect::<PyResult<Vec<_>>>()?;
        Ok(PyList::new(py, dicts)?.into())
    }

    /// Resets the model and clears the statistics.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Returns a snapshot of the current run statistics.
    pub fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.stats.clone())
    }

    /// Returns the history window as a list of entry dicts.
    pub fn history(&self, py: Python) -> PyResult<Py<PyList>> {
        Ok(history_to_list(py, &self.inner.history_snapshot())?.into())
    }

    /// Returns the transition matrix as a list of rows.
    pub fn table(&self) -> Vec<Vec<u32>> {
        self.inner.table_snapshot()
    }

    /// Pretty-prints the history window and the nonzero transition counters.
    pub fn dump_state(&self) {
        self.inner.dump_state();
    }
}

impl PySimulator {
    /// Validates an incoming address against the configured universe.
    fn check_address(&self, address: usize) -> PyResult<()> {
        if address >= self.address_space {
            return Err(PyValueError::new_err(format!(
                "address {} outside universe [0, {})",
                address, self.address_space
            )));
        }
        Ok(())
    }
}
