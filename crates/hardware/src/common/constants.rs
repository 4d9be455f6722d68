//! Global Simulator Constants.
//!
//! This module defines constants shared by the cache model and the trace reader. It includes:
//! 1. **Address Constants:** The fixed address width the model decomposes.
//! 2. **Geometry Limits:** Upper bounds on the configurable cache geometry.
//! 3. **Trace Layout:** Where the operation and operand sit in a `lackey` trace record.

/// Width in bits of every simulated address.
///
/// Trace addresses are parsed into a `u64`; tag, set index and block offset
/// together never exceed this width.
pub const ADDRESS_BITS: u32 = 64;

/// Largest accepted number of set-index bits.
///
/// `2^32` sets is already far beyond any real cache and keeps the set count
/// addressable as a `usize` on 64-bit hosts.
pub const MAX_SET_BITS: u32 = 32;

/// Column of the operation character in a trace record (`" L 10,4"`).
pub const OP_COLUMN: usize = 1;

/// Separator between the address and the access size.
pub const OPERAND_SEPARATOR: char = ',';

/// Returns a mask with the low `bits` bits set.
///
/// Saturates to `u64::MAX` for widths of 64 or more.
#[inline]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= ADDRESS_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
