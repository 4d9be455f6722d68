//! Property tests for the cache model.
//!
//! Each property drives random address streams through a random geometry and
//! checks accounting invariants, or compares every outcome with a simple
//! stack-based LRU model.

use std::collections::VecDeque;

use csim_core::cache::Cache;
use csim_core::config::CacheConfig;
use csim_core::{AccessOutcome, NullObserver, SimStats, Simulator};
use proptest::prelude::*;

/// Stack-based LRU: per set, resident tags ordered most to least recent.
struct ReferenceLru {
    set_bits: u32,
    block_bits: u32,
    ways: usize,
    sets: Vec<VecDeque<u64>>,
}

impl ReferenceLru {
    fn new(set_bits: u32, ways: usize, block_bits: u32) -> Self {
        Self {
            set_bits,
            block_bits,
            ways,
            sets: vec![VecDeque::new(); 1 << set_bits],
        }
    }

    fn access(&mut self, addr: u64) -> AccessOutcome {
        let set_index = ((addr >> self.block_bits) & ((1 << self.set_bits) - 1)) as usize;
        let tag = addr >> (self.set_bits + self.block_bits);
        let set = &mut self.sets[set_index];

        if let Some(pos) = set.iter().position(|&t| t == tag) {
            let _ = set.remove(pos);
            set.push_front(tag);
            return AccessOutcome::Hit;
        }
        let outcome = if set.len() == self.ways {
            let evicted_tag = set.pop_back().unwrap();
            AccessOutcome::MissWithEviction { evicted_tag }
        } else {
            AccessOutcome::Miss
        };
        set.push_front(tag);
        outcome
    }
}

fn geometry() -> impl Strategy<Value = (u32, usize, u32)> {
    (0u32..4, 1usize..6, 0u32..5)
}

fn addresses() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..2048, 0..300)
}

fn trace_text(ops: &[(bool, u64)]) -> String {
    ops.iter()
        .map(|&(modify, addr)| {
            let op = if modify { 'M' } else { 'L' };
            format!(" {op} {addr:x},1\n")
        })
        .collect()
}

proptest! {
    #[test]
    fn matches_reference_lru((s, e, b) in geometry(), addrs in addresses()) {
        let mut cache = Cache::new(&CacheConfig::new(s, e, b)).unwrap();
        let mut model = ReferenceLru::new(s, e, b);
        for addr in addrs {
            prop_assert_eq!(cache.access(addr), model.access(addr), "addr {:#x}", addr);
        }
    }

    #[test]
    fn every_access_is_classified_once((s, e, b) in geometry(), addrs in addresses()) {
        let mut cache = Cache::new(&CacheConfig::new(s, e, b)).unwrap();
        let mut stats = SimStats::new();
        for &addr in &addrs {
            stats.record(cache.access(addr));
        }
        prop_assert_eq!(stats.hits + stats.misses, addrs.len() as u64);
        prop_assert!(stats.evictions <= stats.misses);
    }

    #[test]
    fn no_eviction_while_sets_have_room((s, e, b) in geometry(), addrs in addresses()) {
        let mut cache = Cache::new(&CacheConfig::new(s, e, b)).unwrap();
        let mut seen: Vec<Vec<u64>> = vec![Vec::new(); 1 << s];
        for addr in addrs {
            let fields = cache.decompose(addr);
            let tags = &mut seen[fields.set_index];
            if !tags.contains(&fields.tag) {
                tags.push(fields.tag);
            }
            let over_capacity = tags.len() > e;
            let outcome = cache.access(addr);
            if !over_capacity {
                prop_assert!(!outcome.is_eviction());
            }
        }
    }

    #[test]
    fn occupancy_never_exceeds_capacity((s, e, b) in geometry(), addrs in addresses()) {
        let mut cache = Cache::new(&CacheConfig::new(s, e, b)).unwrap();
        for addr in addrs {
            let _ = cache.access(addr);
            prop_assert!(cache.occupancy() <= (1usize << s) * e);
        }
    }

    #[test]
    fn modify_second_access_always_hits(
        (s, e, b) in geometry(),
        ops in prop::collection::vec((any::<bool>(), 0u64..2048), 0..200),
    ) {
        let mut sim = Simulator::new(&CacheConfig::new(s, e, b)).unwrap();
        let text = trace_text(&ops);
        let modifies = ops.iter().filter(|(m, _)| *m).count() as u64;
        let stats = sim.run_str(&text, NullObserver);

        prop_assert_eq!(stats.records, ops.len() as u64);
        prop_assert_eq!(stats.accesses(), ops.len() as u64 + modifies);
        prop_assert!(stats.hits >= modifies);
    }

    #[test]
    fn replay_is_deterministic(
        (s, e, b) in geometry(),
        ops in prop::collection::vec((any::<bool>(), 0u64..2048), 0..200),
    ) {
        let config = CacheConfig::new(s, e, b);
        let text = trace_text(&ops);
        let first = Simulator::new(&config).unwrap().run_str(&text, NullObserver);

        let mut sim = Simulator::new(&config).unwrap();
        let second = sim.run_str(&text, NullObserver);
        let third = sim.run_str(&text, NullObserver);

        prop_assert_eq!(first, second);
        prop_assert_eq!(second, third);
    }
}
