//! Python↔Rust configuration and event conversion.
//!
//! Converts Python dicts into the core `Config` type via JSON serialization,
//! so the same schema is used from both Python and tests, and renders
//! outcome events and history snapshots as Python dicts.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use markov_core::config::Config;
use markov_core::predictor::{AccessTag, HistoryEntry, PrefetchEvent};

/// Converts a Python dict to a simulator `Config`.
///
/// The dict is serialized to JSON and then deserialized into `Config`. Keys
/// must match the Rust config structure (e.g., `general`, `predictor`,
/// `pattern`).
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A Python dict with configuration sections.
///
/// # Returns
///
/// The deserialized `Config`, or a `PyErr` if the dict is invalid.
pub fn py_dict_to_config(py: Python, dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str_obj = dumps.call1((dict,))?;
    let json_str: String = json_str_obj.extract()?;

    let config: Config = serde_json::from_str(&json_str).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid config: {}", e))
    })?;

    Ok(config)
}

/// Renders one history entry as a Python dict.
pub fn history_entry_to_dict<'py>(
    py: Python<'py>,
    entry: &HistoryEntry,
) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("address", entry.address.val())?;
    d.set_item(
        "tag",
        match entry.tag {
            AccessTag::Demand => "demand",
            AccessTag::Prefetch => "prefetch",
        },
    )?;
    d.set_item("timestamp", entry.timestamp)?;
    Ok(d)
}

/// Renders a history snapshot as a Python list of dicts.
pub fn history_to_list<'py>(
    py: Python<'py>,
    history: &[HistoryEntry],
) -> PyResult<Bound<'py, PyList>> {
    let entries = history
        .iter()
        .map(|e| history_entry_to_dict(py, e))
        .collect::<PyResult<Vec<_>>>()?;
    PyList::new(py, entries)
}

/// Renders one outcome event as a Python dict.
pub fn event_to_dict<'py>(py: Python<'py>, event: &PrefetchEvent) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("address", event.address.val())?;
    d.set_item("hit", event.hit)?;
    d.set_item("prefetch_hit", event.prefetch_hit)?;
    d.set_item("demand_hit", event.demand_hit)?;
    d.set_item("prefetch", event.prefetch)?;
    d.set_item("prefetch_address", event.prefetch_address.map(|a| a.val()))?;
    d.set_item("history", history_to_list(py, &event.history)?)?;
    Ok(d)
}
