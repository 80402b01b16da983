//! Address-trace loader.
//!
//! Reads reference streams from plain-text trace files. One address per
//! line, decimal or `0x`-prefixed hexadecimal; `#` starts a comment and
//! blank lines are skipped. Every address is validated against the
//! configured universe before the stream is accepted.

use std::fs;

use log::debug;

use crate::common::{Addr, TraceError};

/// Loads an address trace from disk.
///
/// # Arguments
///
/// * `path` - Path to the trace file.
/// * `address_space` - The universe size `N` used to validate addresses.
///
/// # Returns
///
/// The parsed reference stream, or a [`TraceError`] describing the first
/// offending line.
pub fn load_trace(path: &str, address_space: usize) -> Result<Vec<Addr>, TraceError> {
    let text =
        fs::read_to_string(path).map_err(|e| TraceError::Io(path.to_string(), e.to_string()))?;
    let trace = parse_trace(&text, address_space)?;
    debug!("loaded {} references from '{}'", trace.len(), path);
    Ok(trace)
}

/// Parses trace text into a validated reference stream.
///
/// # Arguments
///
/// * `text` - Trace file contents.
/// * `address_space` - The universe size `N` used to validate addresses.
pub fn parse_trace(text: &str, address_space: usize) -> Result<Vec<Addr>, TraceError> {
    let mut trace = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let value = if let Some(hex) = line.strip_prefix("0x").or_else(|| line.strip_prefix("0X")) {
            usize::from_str_radix(hex, 16)
        } else {
            line.parse::<usize>()
        }
        .map_err(|_| TraceError::Parse(index + 1, line.to_string()))?;

        if value >= address_space {
            return Err(TraceError::OutOfRange(index + 1, value, address_space));
        }
        trace.push(Addr::new(value));
    }

    Ok(trace)
}
