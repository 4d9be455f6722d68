//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of a trace replay. It provides:
//! 1. **Counters:** Hits, misses and evictions, plus record bookkeeping.
//! 2. **Derived metrics:** Access count, hit rate and miss rate.
//! 3. **Reporting:** The fixed summary line and the machine-readable results artifact.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::cache::AccessOutcome;

/// Statistics accumulated over one trace replay.
///
/// Counters only ever grow during a replay. A fresh value is produced for
/// every run; nothing is carried across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that had to install their block.
    pub misses: u64,
    /// Misses that displaced a valid block. Always `<= misses`.
    pub evictions: u64,
    /// Accepted `L`, `S` and `M` records.
    pub records: u64,
    /// Data records dropped because their operand did not parse.
    pub skipped: u64,
}

impl SimStats {
    /// Creates zeroed statistics.
    pub const fn new() -> Self {
        Self {
            hits: 0,
            misses: 0,
            evictions: 0,
            records: 0,
            skipped: 0,
        }
    }

    /// Tallies one access outcome.
    #[inline]
    pub const fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::MissWithEviction { .. } => {
                self.misses += 1;
                self.evictions += 1;
            }
        }
    }

    /// Total accesses classified, `hits + misses`.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0.0 for an empty run.
    pub const fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fraction of accesses that missed, or 0.0 for an empty run.
    pub const fn miss_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }

    /// The fixed-format summary: `hits:<H> misses:<M> evictions:<E>`.
    pub fn summary_line(&self) -> String {
        format!(
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }

    /// The grading-harness artifact: `"<H> <M> <E>\n"`.
    pub fn results_line(&self) -> String {
        format!("{} {} {}\n", self.hits, self.misses, self.evictions)
    }

    /// Writes [`SimStats::results_line`] to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Propagates the I/O error from creating or writing the file.
    pub fn write_results(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.results_line())
    }

    /// Prints the summary line to stdout.
    pub fn print(&self) {
        println!("{}", self.summary_line());
    }
}
