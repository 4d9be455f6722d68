//! Trace replay loop.
//!
//! The replayer is a fold over trace lines with the cache as accumulator:
//! each accepted record generates one access (`L`, `S`) or two accesses to the
//! same address (`M`), applied strictly in trace order.

use std::io::BufRead;

use tracing::{debug, warn};

use super::observer::AccessObserver;
use super::record::{TraceRecord, parse_line};
use crate::cache::Cache;
use crate::common::error::TraceError;
use crate::stats::SimStats;

/// Drives trace records into a [`Cache`].
///
/// Holds the only mutable borrow of the cache for the duration of a replay.
#[derive(Debug)]
pub struct Replayer<'a, O: AccessObserver> {
    cache: &'a mut Cache,
    observer: O,
}

impl<'a, O: AccessObserver> Replayer<'a, O> {
    /// Creates a replayer over `cache`, reporting events to `observer`.
    pub const fn new(cache: &'a mut Cache, observer: O) -> Self {
        Self { cache, observer }
    }

    /// Applies one decoded record and tallies its outcomes into `stats`.
    pub fn apply(&mut self, record: &TraceRecord, stats: &mut SimStats) {
        self.observer.on_record(record);
        for _ in 0..record.op.accesses() {
            let outcome = self.cache.access(record.address);
            stats.record(outcome);
            self.observer.on_access(record, outcome);
        }
        self.observer.on_record_end(record);
        stats.records += 1;
    }

    /// Replays every line of `reader`.
    ///
    /// Lines are read as raw bytes and decoded lossily, so bytes that are not
    /// UTF-8 only affect the line they appear on. Lines that are not `L`, `S`
    /// or `M` records are ignored. Data records with an unparsable operand are
    /// skipped with a warning and counted in [`SimStats::skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Read`] if the reader fails; no partial statistics
    /// are returned in that case.
    pub fn replay<R: BufRead>(&mut self, mut reader: R) -> Result<SimStats, TraceError> {
        let mut stats = SimStats::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            line_no += 1;
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| TraceError::Read {
                    line: line_no,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            self.feed(line_no, &line, &mut stats);
        }

        debug!(
            records = stats.records,
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            skipped = stats.skipped,
            "replay finished"
        );
        Ok(stats)
    }

    /// Replays an in-memory trace.
    pub fn replay_str(&mut self, trace: &str) -> SimStats {
        let mut stats = SimStats::new();
        for (idx, line) in trace.lines().enumerate() {
            self.feed(idx + 1, line, &mut stats);
        }
        stats
    }

    fn feed(&mut self, line_no: usize, line: &str, stats: &mut SimStats) {
        match parse_line(line) {
            Ok(Some(record)) => self.apply(&record, stats),
            Ok(None) => {}
            Err(e) => {
                warn!(
                    line = line_no,
                    text = %line.trim_end(),
                    error = %e,
                    "skipping malformed trace record"
                );
                stats.skipped += 1;
            }
        }
    }
}
