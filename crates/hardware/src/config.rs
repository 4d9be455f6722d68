//! Configuration for the cache simulator.
//!
//! This module defines the cache geometry used to parameterize the model. It provides:
//! 1. **Defaults:** Baseline geometry constants used when a field is not supplied.
//! 2. **Structure:** [`CacheConfig`] holding `s`, `E` and `b`, deserializable from JSON.
//! 3. **Validation:** Checks that the geometry fits the fixed 64-bit address width.
//!
//! Configuration is supplied by the CLI flags (`-s`, `-E`, `-b`) or as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::{ADDRESS_BITS, MAX_SET_BITS};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline geometry when a field is omitted from
/// a JSON configuration.
mod defaults {
    /// Default set-index bits (16 sets).
    pub const SET_BITS: u32 = 4;

    /// Default associativity (1 line per set = direct-mapped).
    pub const LINES_PER_SET: usize = 1;

    /// Default block-offset bits (16-byte blocks).
    pub const BLOCK_BITS: u32 = 4;
}

/// Cache geometry: `S = 2^s` sets of `E` lines holding `B = 2^b`-byte blocks.
///
/// # Examples
///
/// Deserializing from JSON, using either the long names or the single-letter
/// option names:
///
/// ```
/// use csim_core::config::CacheConfig;
///
/// let config = CacheConfig::from_json(r#"{ "s": 5, "E": 2, "b": 6 }"#).unwrap();
/// assert_eq!(config.num_sets(), 32);
/// assert_eq!(config.lines_per_set, 2);
/// assert_eq!(config.block_bytes(), 64);
/// assert_eq!(config.capacity_bytes(), 32 * 2 * 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of set-index bits (`s`).
    #[serde(alias = "s")]
    pub set_bits: u32,
    /// Number of lines per set (`E`, the associativity).
    #[serde(alias = "E")]
    pub lines_per_set: usize,
    /// Number of block-offset bits (`b`).
    #[serde(alias = "b")]
    pub block_bits: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            set_bits: defaults::SET_BITS,
            lines_per_set: defaults::LINES_PER_SET,
            block_bits: defaults::BLOCK_BITS,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration from the three geometry parameters.
    ///
    /// No validation is performed here; see [`CacheConfig::validate`].
    pub const fn new(set_bits: u32, lines_per_set: usize, block_bits: u32) -> Self {
        Self {
            set_bits,
            lines_per_set,
            block_bits,
        }
    }

    /// Parses and validates a JSON configuration object.
    ///
    /// Missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input, or any error
    /// reported by [`CacheConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the model can represent this geometry.
    ///
    /// `s = 0` (a single set) and `b = 0` (one-byte blocks) are accepted.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ZeroAssociativity`] if `E == 0`.
    /// * [`ConfigError::TooManySets`] if `s` exceeds the supported maximum.
    /// * [`ConfigError::AddressTooWide`] if `s + b` exceeds 64.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_set == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        if self.set_bits > MAX_SET_BITS {
            return Err(ConfigError::TooManySets {
                set_bits: self.set_bits,
            });
        }
        if self.set_bits.saturating_add(self.block_bits) > ADDRESS_BITS {
            return Err(ConfigError::AddressTooWide {
                set_bits: self.set_bits,
                block_bits: self.block_bits,
            });
        }
        Ok(())
    }

    /// Applies the command-line rule that `s`, `E` and `b` are all positive.
    ///
    /// The model itself accepts `s = 0` and `b = 0`; only the front end
    /// rejects them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] naming the first zero option.
    pub fn require_positive(&self) -> Result<(), ConfigError> {
        if self.set_bits == 0 {
            return Err(ConfigError::NonPositive { name: 's' });
        }
        if self.lines_per_set == 0 {
            return Err(ConfigError::NonPositive { name: 'E' });
        }
        if self.block_bits == 0 {
            return Err(ConfigError::NonPositive { name: 'b' });
        }
        Ok(())
    }

    /// Number of sets, `S = 2^s`.
    #[inline]
    pub fn num_sets(&self) -> usize {
        1usize.checked_shl(self.set_bits).unwrap_or(usize::MAX)
    }

    /// Block size in bytes, `B = 2^b`. Informational only.
    #[inline]
    pub fn block_bytes(&self) -> u64 {
        1u64.checked_shl(self.block_bits).unwrap_or(u64::MAX)
    }

    /// Total number of lines, `S × E`.
    #[inline]
    pub fn total_lines(&self) -> usize {
        self.num_sets().saturating_mul(self.lines_per_set)
    }

    /// Total data capacity in bytes, `S × E × B`.
    pub fn capacity_bytes(&self) -> u64 {
        (self.total_lines() as u64).saturating_mul(self.block_bytes())
    }
}

impl fmt::Display for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s={} E={} b={} ({} sets x {} lines x {} B)",
            self.set_bits,
            self.lines_per_set,
            self.block_bits,
            self.num_sets(),
            self.lines_per_set,
            self.block_bytes()
        )
    }
}
