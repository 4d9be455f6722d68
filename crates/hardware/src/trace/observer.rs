//! Per-access observation hooks.
//!
//! The replayer reports every record and access outcome to an [`AccessObserver`].
//! Counting never depends on the observer, so the core stays a pure function of
//! configuration and trace; the observer only adds side channels such as the
//! verbose echo.

use std::io::Write;

use tracing::warn;

use super::record::TraceRecord;
use crate::cache::AccessOutcome;

/// Receives replay events in trace order.
///
/// All methods default to no-ops.
pub trait AccessObserver {
    /// Called before the accesses of an accepted record.
    fn on_record(&mut self, _record: &TraceRecord) {}

    /// Called after each cache access the record generates.
    fn on_access(&mut self, _record: &TraceRecord, _outcome: AccessOutcome) {}

    /// Called after the last access of an accepted record.
    fn on_record_end(&mut self, _record: &TraceRecord) {}
}

impl<O: AccessObserver + ?Sized> AccessObserver for &mut O {
    fn on_record(&mut self, record: &TraceRecord) {
        (**self).on_record(record);
    }

    fn on_access(&mut self, record: &TraceRecord, outcome: AccessOutcome) {
        (**self).on_access(record, outcome);
    }

    fn on_record_end(&mut self, record: &TraceRecord) {
        (**self).on_record_end(record);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl AccessObserver for NullObserver {}

/// Echoes each record and its outcomes, one line per record.
///
/// Output matches the reference simulator's `-v` mode:
///
/// ```text
/// L 10,1 miss
/// M 20,1 miss eviction hit
/// S 18,1 hit
/// ```
///
/// The first write error is logged and further output is suppressed; replay
/// results are unaffected.
#[derive(Debug)]
pub struct VerboseObserver<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> VerboseObserver<W> {
    /// Creates an observer writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    /// Consumes the observer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = self.out.write_fmt(args) {
            warn!(error = %e, "verbose output failed; further echo suppressed");
            self.failed = true;
        }
    }
}

impl<W: Write> AccessObserver for VerboseObserver<W> {
    fn on_record(&mut self, record: &TraceRecord) {
        self.emit(format_args!("{record}"));
    }

    fn on_access(&mut self, _record: &TraceRecord, outcome: AccessOutcome) {
        self.emit(format_args!(" {outcome}"));
    }

    fn on_record_end(&mut self, _record: &TraceRecord) {
        self.emit(format_args!("\n"));
    }
}
