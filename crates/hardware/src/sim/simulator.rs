//! Simulator: owns the cache and replays traces against it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::cache::Cache;
use crate::common::error::{ConfigError, SimError, TraceError};
use crate::config::CacheConfig;
use crate::stats::SimStats;
use crate::trace::{AccessObserver, Replayer};

/// Top-level simulator: a cache plus the replay entry points.
///
/// Every run starts from an empty cache, so the statistics are a pure
/// function of the configuration and the trace.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The simulated cache. Holds the state left by the most recent run.
    pub cache: Cache,
}

impl Simulator {
    /// Creates a simulator with an empty cache of the given geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry is invalid.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            cache: Cache::new(config)?,
        })
    }

    /// Replays the trace file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Open`] if the file cannot be opened and
    /// [`TraceError::Read`] if reading fails part-way; no statistics are
    /// produced in either case.
    pub fn run_file<O: AccessObserver>(
        &mut self,
        path: impl AsRef<Path>,
        observer: O,
    ) -> Result<SimStats, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TraceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(trace = %path.display(), config = %self.cache.config(), "replaying trace");
        self.run_reader(BufReader::new(file), observer)
    }

    /// Replays a trace from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Read`] if the reader fails.
    pub fn run_reader<R: BufRead, O: AccessObserver>(
        &mut self,
        reader: R,
        observer: O,
    ) -> Result<SimStats, SimError> {
        self.cache.reset();
        let stats = Replayer::new(&mut self.cache, observer).replay(reader)?;
        Ok(stats)
    }

    /// Replays an in-memory trace.
    pub fn run_str<O: AccessObserver>(&mut self, trace: &str, observer: O) -> SimStats {
        self.cache.reset();
        Replayer::new(&mut self.cache, observer).replay_str(trace)
    }
}
