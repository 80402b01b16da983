//! Synthetic address-pattern generator.
//!
//! Produces the deterministic reference streams used by the CLI and the test
//! suite: sequential, strided, interleaved, random, and repeated. Every
//! pattern is a pure function of its configuration; the random pattern uses
//! a seeded xorshift generator so identical seeds replay identical streams.

use crate::common::Addr;
use crate::config::{PatternConfig, PatternKind};

/// Generates a reference stream for the given pattern configuration.
///
/// Addresses are reduced into the universe `[0, address_space)`; a stride or
/// period of zero is clamped to one.
///
/// # Arguments
///
/// * `config` - Pattern kind and parameters.
/// * `address_space` - The universe size `N`.
///
/// # Returns
///
/// A vector of `config.length` in-universe addresses.
///
/// # Panics
///
/// Panics if `address_space` is zero.
pub fn generate(config: &PatternConfig, address_space: usize) -> Vec<Addr> {
    assert!(address_space > 0, "address space must be nonzero");

    let stride = if config.stride == 0 { 1 } else { config.stride };
    let period = if config.period == 0 { 1 } else { config.period };

    match config.kind {
        PatternKind::Sequential => (0..config.length)
            .map(|i| Addr::new(i % address_space))
            .collect(),
        PatternKind::Strided => (0..config.length)
            .map(|i| Addr::new((i * stride) % address_space))
            .collect(),
        PatternKind::Interleaved => (0..config.length)
            .map(|i| Addr::new((i ^ 1) % address_space))
            .collect(),
        PatternKind::Repeated => (0..config.length)
            .map(|i| Addr::new((i % period) % address_space))
            .collect(),
        PatternKind::Random => {
            let mut state = if config.seed == 0 { 1 } else { config.seed };
            (0..config.length)
                .map(|_| {
                    state = xorshift(state);
                    Addr::new((state as usize) % address_space)
                })
                .collect()
        }
    }
}

/// One xorshift64 round.
fn xorshift(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}
