//! Simulation statistics collection and reporting.
//!
//! This module tracks aggregate metrics for a prefetcher run. It provides:
//! 1. **Reference counts:** Total references, hits, and misses.
//! 2. **Hit breakdown:** Demand hits versus prefetch hits.
//! 3. **Prefetch effectiveness:** Issued prefetches, useful prefetches, and
//!    derived accuracy.

use std::time::Instant;

use crate::predictor::PrefetchEvent;

/// Simulation statistics structure tracking all run metrics.
///
/// Updated once per processed reference from its outcome event; derived
/// percentages are computed at print time with division-by-zero guards.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total demand references processed.
    pub references: u64,
    /// References found resident in the history window.
    pub hits: u64,
    /// References absent from the history window.
    pub misses: u64,
    /// Hits on entries tagged `Prefetch` (useful prefetches).
    pub prefetch_hits: u64,
    /// Hits on entries tagged `Demand`.
    pub demand_hits: u64,
    /// Speculative prefetches issued.
    pub prefetches_issued: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            references: 0,
            hits: 0,
            misses: 0,
            prefetch_hits: 0,
            demand_hits: 0,
            prefetches_issued: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"classification"`, `"prefetch"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "classification", "prefetch"];

impl SimStats {
    /// Folds one reference outcome into the aggregates.
    ///
    /// # Arguments
    ///
    /// * `event` - The outcome event for the processed reference.
    pub fn record(&mut self, event: &PrefetchEvent) {
        self.references += 1;
        if event.hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        if event.prefetch_hit {
            self.prefetch_hits += 1;
        }
        if event.demand_hit {
            self.demand_hits += 1;
        }
        if event.prefetch {
            self.prefetches_issued += 1;
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"classification"`, or `"prefetch"`. Pass an empty slice to print all
    /// sections (same as `print()`).
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();
        let refs = if self.references == 0 {
            1
        } else {
            self.references
        };

        if want("summary") {
            println!("\n==========================================================");
            println!("MARKOV PREFETCHER SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {:.4} s", seconds);
            println!("sim_references           {}", self.references);
            println!(
                "sim_hit_rate             {:.2}%",
                (self.hits as f64 / refs as f64) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("classification") {
            println!("REFERENCE CLASSIFICATION");
            println!(
                "  hits                   {} ({:.2}%)",
                self.hits,
                (self.hits as f64 / refs as f64) * 100.0
            );
            println!(
                "  misses                 {} ({:.2}%)",
                self.misses,
                (self.misses as f64 / refs as f64) * 100.0
            );
            println!("  hits.demand            {}", self.demand_hits);
            println!("  hits.prefetch          {}", self.prefetch_hits);
            println!("----------------------------------------------------------");
        }
        if want("prefetch") {
            let issued = self.prefetches_issued;
            let accuracy = if issued > 0 {
                100.0 * (self.prefetch_hits as f64 / issued as f64)
            } else {
                0.0
            };
            println!("PREFETCH EFFECTIVENESS");
            println!("  pf.issued              {}", issued);
            println!("  pf.useful              {}", self.prefetch_hits);
            println!("  pf.accuracy            {:.2}%", accuracy);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
