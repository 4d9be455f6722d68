//! Least Recently Used (LRU) bookkeeping.
//!
//! Recency is tracked with a per-line logical clock rather than a usage stack.
//! Every access stamps the touched line with one more than the largest stamp
//! currently in its set, so the line with the smallest stamp is always the
//! least recently used.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `next_stamp()`: O(E) where E is the associativity
//!   - `select_victim()`: O(E)
//! - **Space Complexity:** one `u64` per line
//! - **Best Case:** Working sets that fit in `E` lines per set
//! - **Worst Case:** Cyclic scans over `E + 1` blocks of one set (every access misses)

use super::line::CacheLine;

/// Returns the stamp to give the next line touched in `set`.
///
/// The maximum is taken over every line, valid or not. Invalid lines start at
/// recency 0 and keep the stamp they had when they were last valid.
#[inline]
pub fn next_stamp(set: &[CacheLine]) -> u64 {
    set.iter().map(|line| line.recency).max().unwrap_or(0) + 1
}

/// Picks the way to fill on a miss.
///
/// The first invalid way wins. If every way is valid, the way with the strictly
/// smallest recency is chosen, the lowest way winning ties.
///
/// `set` must not be empty.
#[inline]
pub fn select_victim(set: &[CacheLine]) -> usize {
    let mut victim = 0;
    let mut oldest = u64::MAX;
    for (way, line) in set.iter().enumerate() {
        if !line.valid {
            return way;
        }
        if line.recency < oldest {
            oldest = line.recency;
            victim = way;
        }
    }
    victim
}
