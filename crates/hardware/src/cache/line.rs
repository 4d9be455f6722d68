//! Cache line metadata.

/// One line of a cache set.
///
/// Only metadata is modeled; block payload bytes are never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the line currently holds a block.
    pub valid: bool,
    /// Tag of the resident block. Meaningless while `valid` is false.
    pub tag: u64,
    /// Logical timestamp of the last access; higher is more recent.
    pub recency: u64,
}

impl CacheLine {
    /// Returns true if this line holds the block with `tag`.
    #[inline(always)]
    pub const fn matches(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Installs the block with `tag`, stamping it with `recency`.
    #[inline(always)]
    pub const fn fill(&mut self, tag: u64, recency: u64) {
        self.valid = true;
        self.tag = tag;
        self.recency = recency;
    }
}
