//! Common types shared across the cache simulator.
//!
//! This module provides the building blocks used by the cache model and the trace
//! replayer. It includes:
//! 1. **Address Types:** A strong address type and its tag/set/offset decomposition.
//! 2. **Constants:** Address width, geometry limits and trace record layout.
//! 3. **Error Handling:** Configuration, parse and trace errors.

/// Address type and decomposition.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{Addr, AddressFields};
pub use constants::ADDRESS_BITS;
pub use error::{ConfigError, ParseError, SimError, TraceError};
