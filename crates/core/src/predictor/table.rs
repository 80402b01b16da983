//! First-order Markov transition table.
//!
//! An `N x N` matrix of saturating counters where entry `(i, j)` holds the
//! number of observed immediate transitions from address `i` to address `j`.
//! The table is the sole learning structure in the predictor; saturation
//! prevents pathological dominance from long runs.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `observe()`: O(1)
//!   - `most_probable_successor()`: O(N) row scan
//! - **Space Complexity:** O(N²) counters, allocated once at construction.

use crate::common::Addr;

/// Transition table state.
pub struct TransitionTable {
    /// Flat row-major `size * size` counter matrix.
    counts: Vec<u32>,
    /// Address-space size `N` (rows and columns).
    size: usize,
    /// Saturation ceiling, `2^B - 1` for a `B`-bit counter.
    max_count: u32,
}

impl TransitionTable {
    /// Creates a new transition table with all counters at zero.
    ///
    /// # Arguments
    ///
    /// * `size` - Address-space size `N`; must be nonzero.
    /// * `counter_bits` - Counter width `B` in bits; must be in `[1, 32]`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `counter_bits` is outside `[1, 32]`.
    pub fn new(size: usize, counter_bits: u32) -> Self {
        assert!(size > 0, "address space must be nonzero");
        assert!(
            (1..=32).contains(&counter_bits),
            "counter width must be in [1, 32] bits"
        );
        let max_count = (((1u64) << counter_bits) - 1) as u32;

        Self {
            counts: vec![0; size * size],
            size,
            max_count,
        }
    }

    /// Returns the address-space size `N`.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the saturation ceiling for each counter.
    #[inline(always)]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Records one observed transition `prev -> curr`.
    ///
    /// The counter saturates at the ceiling; further observations of a
    /// saturated edge leave the table unchanged.
    ///
    /// # Arguments
    ///
    /// * `prev` - Source address of the transition.
    /// * `curr` - Destination address of the transition.
    ///
    /// # Panics
    ///
    /// Panics if either address lies outside the universe.
    pub fn observe(&mut self, prev: Addr, curr: Addr) {
        assert!(prev.in_space(self.size), "transition source out of range");
        assert!(curr.in_space(self.size), "transition target out of range");

        let cell = &mut self.counts[prev.val() * self.size + curr.val()];
        if *cell < self.max_count {
            *cell += 1;
        }
    }

    /// Returns the most probable successor of `addr`, if any.
    ///
    /// Scans the row left to right and keeps the first maximum, so ties
    /// resolve to the lowest column index. Returns `None` iff the row is
    /// all-zero.
    ///
    /// # Arguments
    ///
    /// * `addr` - The address whose successors are queried.
    ///
    /// # Returns
    ///
    /// The lowest-index column holding the row maximum, or `None` when the
    /// row has never been observed.
    pub fn most_probable_successor(&self, addr: Addr) -> Option<Addr> {
        assert!(addr.in_space(self.size), "query address out of range");

        let row = &self.counts[addr.val() * self.size..(addr.val() + 1) * self.size];
        let mut best = 0u32;
        let mut successor = None;
        for (col, &count) in row.iter().enumerate() {
            if count > best {
                best = count;
                successor = Some(Addr::new(col));
            }
        }
        successor
    }

    /// Returns the counter value for the transition `prev -> curr`.
    ///
    /// # Panics
    ///
    /// Panics if either address lies outside the universe.
    pub fn count(&self, prev: Addr, curr: Addr) -> u32 {
        assert!(prev.in_space(self.size), "transition source out of range");
        assert!(curr.in_space(self.size), "transition target out of range");
        self.counts[prev.val() * self.size + curr.val()]
    }

    /// Returns a copy of the full matrix, one inner vector per row.
    ///
    /// Read-only observability view; does not alias predictor state.
    pub fn snapshot(&self) -> Vec<Vec<u32>> {
        self.counts.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Clears every counter back to zero.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }
}
