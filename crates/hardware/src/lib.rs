//! Trace-driven set-associative cache simulator library.
//!
//! This crate replays a Valgrind memory-access trace against a configurable cache:
//! 1. **Configuration:** Cache geometry (`s` set bits, `E` lines per set, `b` block bits).
//! 2. **Cache model:** Set indexing, tag comparison and true LRU replacement.
//! 3. **Trace:** Record decoding and the replay loop that feeds the cache.
//! 4. **Simulation:** A facade that opens a trace and returns the final statistics.
//! 5. **Statistics:** Hit, miss and eviction counters and their reporting formats.
//!
//! # Examples
//!
//! ```
//! use csim_core::{CacheConfig, NullObserver, Simulator};
//!
//! let mut sim = Simulator::new(&CacheConfig::new(1, 1, 0)).unwrap();
//! let stats = sim.run_str(" L 0,1\n L 1,1\n L 0,1\n", NullObserver);
//! assert_eq!(stats.summary_line(), "hits:1 misses:2 evictions:0");
//! ```

/// Set-associative cache model (lines, LRU, access).
pub mod cache;
/// Common types and constants (addresses, limits, errors).
pub mod common;
/// Cache geometry configuration.
pub mod config;
/// Simulation driver.
pub mod sim;
/// Hit/miss/eviction statistics and reporting.
pub mod stats;
/// Trace decoding and replay.
pub mod trace;

/// Cache model; construct with `Cache::new`.
pub use crate::cache::{AccessOutcome, Cache};
/// Error types returned by the library.
pub use crate::common::error::{ConfigError, ParseError, SimError, TraceError};
/// Cache geometry; use `CacheConfig::new` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Trace replay facade.
pub use crate::sim::Simulator;
/// Replay statistics.
pub use crate::stats::SimStats;
/// Observation hooks for the replay loop.
pub use crate::trace::{AccessObserver, NullObserver, VerboseObserver};
