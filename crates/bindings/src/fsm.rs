//! Staged sequencer Python binding.
//!
//! Exposes the six-state machine to Python at micro-step granularity:
//! present an address, step the clock, sample outputs in `ReportResult`,
//! and probe the full observability surface between steps.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use markov_core::common::Addr;
use markov_core::config::PredictorConfig;
use markov_core::predictor::{FsmState, Predictor, PrefetcherFsm};

use crate::conversion::{event_to_dict, history_entry_to_dict, py_dict_to_config};

/// Python-exposed staged sequencer.
#[pyclass]
pub struct PyPrefetcherFsm {
    pub inner: PrefetcherFsm,
    config: PredictorConfig,
}

#[pymethods]
impl PyPrefetcherFsm {
    /// Creates a new sequencer in the idle state.
    ///
    /// # Arguments
    /// * `py` - Python interpreter token.
    /// * `config_dict` - A Python dictionary containing configuration
    ///   parameters; only the `predictor` section is consulted.
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

        Ok(PyPrefetcherFsm {
            inner: PrefetcherFsm::new(&config.predictor),
            config: config.predictor,
        })
    }

    /// Presents an input address to be latched on the next idle step.
    ///
    /// # Errors
    /// Returns a `PyValueError` for an out-of-universe address, or a
    /// `PyRuntimeError` if a reference is already in flight.
    pub fn present(&mut self, address: usize) -> PyResult<()> {
        if address >= self.config.address_space {
            return Err(PyValueError::new_err(format!(
                "address {} outside universe [0, {})",
                address, self.config.address_space
            )));
        }
        if self.inner.state() != FsmState::Idle {
            return Err(PyRuntimeError::new_err(
                "reference already in flight; step to Idle first",
            ));
        }
        self.inner.present(Addr::new(address));
        Ok(())
    }

    /// Advances the machine by one micro-step.
    pub fn step(&mut self) {
        self.inner.step();
    }

    /// Processes one reference as a full six-step traversal and returns the
    /// sampled event.
    pub fn access(&mut self, py: Python, address: usize) -> PyResult<Py<PyDict>> {
        self.present(address)?;
        let event = {
            for _ in 0..5 {
                self.inner.step();
            }
            let event = self.inner.output().cloned();
            self.inner.step();
            event
        };
        match event {
            Some(event) => Ok(event_to_dict(py, &event)?.into()),
            None => Err(PyRuntimeError::new_err("sequencer failed to report")),
        }
    }

    /// Returns the current state index (0..=5).
    pub fn state(&self) -> u8 {
        self.inner.state().index()
    }

    /// Returns the current state name.
    pub fn state_name(&self) -> &'static str {
        self.inner.state().name()
    }

    /// Returns the micro-step counter.
    pub fn cycles(&self) -> u64 {
        self.inner.cycles()
    }

    /// Returns the number of completed references.
    pub fn references(&self) -> u64 {
        self.inner.references()
    }

    /// Returns the event for the in-flight reference, or `None` outside
    /// `ReportResult`.
    pub fn output(&self, py: Python) -> PyResult<Option<Py<PyDict>>> {
        match self.inner.output() {
            Some(event) => Ok(Some(event_to_dict(py, event)?.into())),
            None => Ok(None),
        }
    }

    /// Returns the full introspection view of the machine as a dict.
    ///
    /// Keys: `state`, `state_name`, `cycle`, `address`, `prev`, `predicted`,
    /// `predicted_in_history`, `history` (one lane per window slot, `None`
    /// when unoccupied), and `table`.
    pub fn probe(&self, py: Python) -> PyResult<Py<PyDict>> {
        let probe = self.inner.probe();
        let d = PyDict::new(py);
        d.set_item("state", probe.state.index())?;
        d.set_item("state_name", probe.state.name())?;
        d.set_item("cycle", probe.cycle)?;
        d.set_item("address", probe.address.map(|a| a.val()))?;
        d.set_item("prev", probe.prev.map(|a| a.val()))?;
        d.set_item("predicted", probe.predicted.map(|a| a.val()))?;
        d.set_item("predicted_in_history", probe.predicted_in_history)?;

        let lanes = probe
            .history
            .iter()
            .map(|lane| match lane {
                Some(entry) => Ok(Some(history_entry_to_dict(py, entry)?)),
                None => Ok(None),
            })
            .collect::<PyResult<Vec<_>>>()?;
        d.set_item("history", lanes)?;
        d.set_item("table", probe.table)?;
        Ok(d.into())
    }

    /// Discards any in-flight reference and restores the post-construction
    /// state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
