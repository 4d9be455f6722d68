//! Memory address type and cache-field decomposition.
//!
//! This module defines the address type fed to the cache model. It provides the following:
//! 1. **Type Safety:** A strong type for trace addresses so raw counters and tags are not mixed up.
//! 2. **Decomposition:** Splitting an address into tag, set index and block offset for a geometry.
//! 3. **Formatting:** Lowercase hexadecimal display matching the trace format.

use std::fmt;

use super::constants::{ADDRESS_BITS, low_mask};

/// A data address taken from a memory-access trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u64);

/// The three fields an address is split into for a given cache geometry.
///
/// For set-index bits `s` and block-offset bits `b`:
///
/// ```text
///  63                    s+b        b           0
/// +------------------------+----------+----------+
/// |          tag           | set idx  |  offset  |
/// +------------------------+----------+----------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressFields {
    /// High-order bits identifying the block within its set.
    pub tag: u64,
    /// Index of the set the block maps to, always `< 2^s`.
    pub set_index: usize,
    /// Byte offset inside the block. Not used by the model.
    pub block_offset: u64,
}

impl Addr {
    /// Creates a new address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Splits the address into tag, set index and block offset.
    ///
    /// # Arguments
    ///
    /// * `set_bits` - Number of set-index bits (`s`).
    /// * `block_bits` - Number of block-offset bits (`b`).
    ///
    /// Shifts of the full address width or more produce zero, so a geometry
    /// with `s + b == 64` yields a tag of 0 for every address.
    #[inline]
    pub const fn split(self, set_bits: u32, block_bits: u32) -> AddressFields {
        let block_offset = self.0 & low_mask(block_bits);
        let set_index = shr(self.0, block_bits) & low_mask(set_bits);
        let tag = shr(self.0, set_bits + block_bits);
        AddressFields {
            tag,
            set_index: set_index as usize,
            block_offset,
        }
    }
}

#[inline(always)]
const fn shr(value: u64, bits: u32) -> u64 {
    if bits >= ADDRESS_BITS { 0 } else { value >> bits }
}

impl From<u64> for Addr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
