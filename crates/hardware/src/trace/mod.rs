//! Memory-access trace handling.
//!
//! This module turns Valgrind `lackey`-style trace text into cache accesses. It provides:
//! 1. **Records:** Decoding one trace line into an operation, address and size.
//! 2. **Replay:** Driving each data record into the cache and tallying the outcomes.
//! 3. **Observation:** An injectable per-access hook used for the verbose echo.

/// Per-access observation hooks.
pub mod observer;

/// Trace record decoding.
pub mod record;

/// Trace replay loop.
pub mod replay;

pub use observer::{AccessObserver, NullObserver, VerboseObserver};
pub use record::{Operation, TraceRecord, parse_line};
pub use replay::Replayer;
