//! Statistics Python binding.
//!
//! Exposes run statistics to Python: getters for reference and hit counts,
//! `print` / `print_sections` for human-readable output, and `to_dict` for
//! JSON-serializable export.

use pyo3::prelude::*;

use markov_core::stats::SimStats;

/// Python-exposed statistics: wraps `SimStats` for read and print from
/// Python.
#[pyclass]
#[derive(Clone)]
pub struct PyStats {
    pub inner: SimStats,
}

#[pymethods]
impl PyStats {
    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "classification",
    /// "prefetch". Pass an empty list for a full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    #[getter]
    fn references(&self) -> u64 {
        self.inner.references
    }
    #[getter]
    fn hits(&self) -> u64 {
        self.inner.hits
    }
    #[getter]
    fn misses(&self) -> u64 {
        self.inner.misses
    }
    #[getter]
    fn prefetch_hits(&self) -> u64 {
        self.inner.prefetch_hits
    }
    #[getter]
    fn demand_hits(&self) -> u64 {
        self.inner.demand_hits
    }
    #[getter]
    fn prefetches_issued(&self) -> u64 {
        self.inner.prefetches_issued
    }

    /// Export all stats as a Python dict (JSON-serializable) for
    /// reproducible experiments.
    fn to_dict(&self, py: Python<'_>) -> pyo3::PyResult<pyo3::Py<pyo3::types::PyDict>> {
        let d = pyo3::types::PyDict::new(py);
        let s = &self.inner;
        d.set_item("references", s.references)?;
        d.set_item("hits", s.hits)?;
        d.set_item("misses", s.misses)?;
        d.set_item("demand_hits", s.demand_hits)?;
        d.set_item("prefetch_hits", s.prefetch_hits)?;
        d.set_item("prefetches_issued", s.prefetches_issued)?;

        let hit_rate = if s.references > 0 {
            100.0 * (s.hits as f64 / s.references as f64)
        } else {
            0.0
        };
        d.set_item("hit_rate_pct", hit_rate)?;

        let accuracy = if s.prefetches_issued > 0 {
            100.0 * (s.prefetch_hits as f64 / s.prefetches_issued as f64)
        } else {
            0.0
        };
        d.set_item("prefetch_accuracy_pct", accuracy)?;

        Ok(d.into())
    }
}

impl From<SimStats> for PyStats {
    fn from(inner: SimStats) -> Self {
        PyStats { inner }
    }
}
