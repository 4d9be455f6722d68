//! Simulation driver.
//!
//! Ties a cache geometry to a trace source and produces the final statistics.

/// Top-level simulator facade.
pub mod simulator;

pub use simulator::Simulator;
