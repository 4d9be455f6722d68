//! Set-Associative Cache Model.
//!
//! This module implements the cache whose hit/miss/eviction behavior a trace is
//! replayed against. It models:
//! 1. **Geometry:** `S = 2^s` sets of `E` lines, stored as one flattened `S × E` vector.
//! 2. **Lookup:** Set indexing and tag comparison on the decomposed address.
//! 3. **Replacement:** True LRU using a per-line logical clock (see [`lru`]).
//!
//! Block payloads are never stored; only the valid bit, tag and recency stamp.

/// Cache line metadata.
pub mod line;

/// LRU stamp and victim selection.
pub mod lru;

use std::fmt;

use tracing::{debug, trace};

pub use self::line::CacheLine;
use crate::common::addr::{Addr, AddressFields};
use crate::common::error::ConfigError;
use crate::config::CacheConfig;

/// Result of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The block was resident.
    Hit,
    /// The block was installed into an empty line.
    Miss,
    /// The block was installed over a valid line.
    MissWithEviction {
        /// Tag of the block that was evicted.
        evicted_tag: u64,
    },
}

impl AccessOutcome {
    /// Returns true for [`AccessOutcome::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Returns true for either miss variant.
    #[inline]
    pub const fn is_miss(self) -> bool {
        !self.is_hit()
    }

    /// Returns true if a valid block was evicted.
    #[inline]
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::MissWithEviction { .. })
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Miss => f.write_str("miss"),
            Self::MissWithEviction { .. } => f.write_str("miss eviction"),
        }
    }
}

/// A set-associative cache with LRU replacement.
///
/// The cache is exclusively owned by its caller; `access` takes `&mut self`,
/// so accesses are applied strictly in program order.
#[derive(Clone, Debug)]
pub struct Cache {
    config: CacheConfig,
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
}

impl Cache {
    /// Creates an empty cache for the given geometry.
    ///
    /// Every line starts invalid with tag 0 and recency 0.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`CacheConfig::validate`], or
    /// [`ConfigError::Allocation`] if the line storage cannot be reserved.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let num_sets = config.num_sets();
        let ways = config.lines_per_set;
        let total = num_sets
            .checked_mul(ways)
            .ok_or(ConfigError::TooManySets {
                set_bits: config.set_bits,
            })?;

        let mut lines = Vec::new();
        lines
            .try_reserve_exact(total)
            .map_err(|_| ConfigError::Allocation { lines: total })?;
        lines.resize(total, CacheLine::default());

        debug!(
            sets = num_sets,
            ways,
            block_bytes = config.block_bytes(),
            capacity_bytes = config.capacity_bytes(),
            "cache initialized"
        );

        Ok(Self {
            config: *config,
            lines,
            num_sets,
            ways,
        })
    }

    /// Geometry this cache was built with.
    #[inline]
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of sets, `S`.
    #[inline]
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Number of lines per set, `E`.
    #[inline]
    pub const fn lines_per_set(&self) -> usize {
        self.ways
    }

    /// Splits `addr` into tag, set index and block offset for this geometry.
    #[inline]
    pub const fn decompose(&self, addr: u64) -> AddressFields {
        Addr::new(addr).split(self.config.set_bits, self.config.block_bits)
    }

    /// Lines of set `index`, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_sets()`.
    pub fn set(&self, index: usize) -> &[CacheLine] {
        let base = index * self.ways;
        &self.lines[base..base + self.ways]
    }

    /// Checks if the block containing `addr` is resident, without touching LRU state.
    pub fn contains(&self, addr: u64) -> bool {
        let fields = self.decompose(addr);
        self.set(fields.set_index)
            .iter()
            .any(|line| line.matches(fields.tag))
    }

    /// Number of valid lines across the whole cache.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().filter(|line| line.valid).count()
    }

    /// Accesses the block containing `addr`.
    ///
    /// On a hit the line is promoted to most recently used. On a miss the first
    /// empty way is filled, or the least recently used way is evicted when the
    /// set is full.
    ///
    /// The set index is always in range: it is masked to `s` bits and the
    /// vector holds exactly `2^s × E` lines.
    pub fn access(&mut self, addr: u64) -> AccessOutcome {
        let AddressFields { tag, set_index, .. } = self.decompose(addr);
        let base = set_index * self.ways;
        let set = &mut self.lines[base..base + self.ways];

        let stamp = lru::next_stamp(set);

        if let Some(line) = set.iter_mut().find(|line| line.matches(tag)) {
            line.recency = stamp;
            trace!(addr, set_index, tag, "hit");
            return AccessOutcome::Hit;
        }

        let way = lru::select_victim(set);
        let victim = &mut set[way];
        let outcome = if victim.valid {
            AccessOutcome::MissWithEviction {
                evicted_tag: victim.tag,
            }
        } else {
            AccessOutcome::Miss
        };
        victim.fill(tag, stamp);

        trace!(addr, set_index, tag, way, ?outcome, "miss");
        outcome
    }

    /// Invalidates every line and zeroes all recency stamps.
    ///
    /// Leaves the cache in the same state as a freshly constructed one.
    pub fn reset(&mut self) {
        self.lines.fill(CacheLine::default());
    }
}
