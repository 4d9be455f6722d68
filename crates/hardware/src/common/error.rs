//! Error definitions for the cache simulator.
//!
//! This module defines every failure the library can report. It provides:
//! 1. **Configuration Errors:** Cache geometries the model cannot represent.
//! 2. **Parse Errors:** Trace records whose operand text does not decode.
//! 3. **Trace Errors:** Fatal failures opening or reading a trace source.
//! 4. **Top-level Errors:** A single [`SimError`] for callers driving a whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::constants::{ADDRESS_BITS, MAX_SET_BITS};

/// Invalid cache geometry.
///
/// Raised before any cache storage is allocated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Associativity `E` was zero; every set needs at least one line.
    #[error("associativity (E) must be at least 1")]
    ZeroAssociativity,

    /// `s + b` exceeds the fixed address width.
    #[error(
        "set bits ({set_bits}) plus block bits ({block_bits}) exceed the {width}-bit address width",
        width = ADDRESS_BITS
    )]
    AddressTooWide {
        /// Requested set-index bits.
        set_bits: u32,
        /// Requested block-offset bits.
        block_bits: u32,
    },

    /// `2^s` sets cannot be allocated.
    #[error("set bits ({set_bits}) exceed the supported maximum of {max}", max = MAX_SET_BITS)]
    TooManySets {
        /// Requested set-index bits.
        set_bits: u32,
    },

    /// The host could not allocate storage for every cache line.
    #[error("cannot allocate {lines} cache lines for this geometry")]
    Allocation {
        /// Requested `S × E` line count.
        lines: usize,
    },

    /// A command-line style parameter was zero where a positive value is required.
    #[error("parameter -{name} must be a positive integer")]
    NonPositive {
        /// Option letter (`s`, `E` or `b`).
        name: char,
    },

    /// Configuration JSON could not be decoded.
    #[error("invalid cache configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Operand of an `L`, `S` or `M` record that could not be decoded.
///
/// Not fatal: the replayer skips the record and logs a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing followed the operation character.
    #[error("missing address operand")]
    MissingOperand,

    /// No `,<size>` after the address.
    #[error("missing access size after address")]
    MissingSize,

    /// Address is not a hexadecimal `u64`.
    #[error("invalid hex address '{0}'")]
    InvalidAddress(String),

    /// Size is not a decimal `u32`.
    #[error("invalid access size '{0}'")]
    InvalidSize(String),
}

/// Fatal failure of the trace source.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be opened.
    #[error("{}: {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading failed part-way through the trace.
    #[error("trace read failed at line {line}: {source}")]
    Read {
        /// 1-based line number being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Any error that aborts a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache geometry.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trace could not be opened or read.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
