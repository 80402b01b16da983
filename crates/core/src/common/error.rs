//! Trace-loader error definitions.
//!
//! This module defines the error taxonomy for address-trace ingestion. It
//! provides:
//! 1. **Error Representation:** All ways a trace file can fail to load.
//! 2. **Error Handling:** Integration with the standard Rust error traits for
//!    system-level reporting.
//!
//! The predictor core itself has no recoverable error conditions; malformed
//! parameters and out-of-range addresses are programming errors and panic at
//! the boundary. Only the file-loading seam returns `Result`.

use std::fmt;

/// Errors raised while loading an address trace from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// The trace file could not be read.
    ///
    /// The associated values are the path and the underlying I/O error text.
    Io(String, String),

    /// A line could not be parsed as an address.
    ///
    /// The associated values are the 1-based line number and the offending
    /// text.
    Parse(usize, String),

    /// A parsed address lies outside the configured universe.
    ///
    /// The associated values are the 1-based line number, the address, and
    /// the address-space size.
    OutOfRange(usize, usize, usize),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(path, err) => write!(f, "cannot read trace '{}': {}", path, err),
            TraceError::Parse(line, text) => {
                write!(f, "trace line {}: cannot parse address '{}'", line, text)
            }
            TraceError::OutOfRange(line, addr, space) => write!(
                f,
                "trace line {}: address {} outside universe [0, {})",
                line, addr, space
            ),
        }
    }
}

impl std::error::Error for TraceError {}
