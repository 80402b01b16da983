//! Memory-reference address type.
//!
//! This module defines a strong type for addresses observed by the predictor
//! to prevent accidental mixing with table indices and counter values. It
//! provides the following:
//! 1. **Type Safety:** Distinguishes reference addresses from plain integers
//!    at compile time.
//! 2. **Universe Checks:** A bounds predicate against the configured address
//!    space `[0, N)`.

use std::fmt;

/// An address drawn from the predictor's bounded universe `[0, N)`.
///
/// The predictor is parametric in the universe size `N`; the reference
/// configuration uses `N = 32` (5-bit addresses). Addresses outside the
/// universe are a programming error and are rejected at the input boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub usize);

impl Addr {
    /// Creates a new address from a raw value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw address value.
    ///
    /// # Returns
    ///
    /// A new `Addr` instance wrapping the provided value.
    #[inline(always)]
    pub fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub fn val(&self) -> usize {
        self.0
    }

    /// Returns true if the address lies inside the universe `[0, space)`.
    ///
    /// # Arguments
    ///
    /// * `space` - The address-space size `N`.
    #[inline(always)]
    pub fn in_space(&self, space: usize) -> bool {
        self.0 < space
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Addr {
    fn from(addr: usize) -> Self {
        Self(addr)
    }
}
