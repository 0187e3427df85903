//! Bounded transposition cache with least-recently-used eviction
//!
//! Entries live in a hash map keyed by Zobrist fingerprint. Recency is an
//! ordered map from a monotonically increasing stamp to key: the smallest
//! stamp is the entry to evict, and touching a key gives it a fresh stamp.

use crate::board::Color;
use crate::eval::Score;
use std::collections::{BTreeMap, HashMap};

/// Default number of entries
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// Stored search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: Score,
    pub side: Color,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: CacheEntry,
    stamp: u64,
}

/// Fixed-capacity key/value store. Capacity is set at construction and never grows.
#[derive(Debug, Clone)]
pub struct TranspositionCache {
    table: HashMap<u64, Slot>,
    recency: BTreeMap<u64, u64>,
    next_stamp: u64,
    capacity: usize,
}

impl TranspositionCache {
    /// A cache holding at most `capacity` entries (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            table: HashMap::with_capacity(capacity.min(1 << 16)),
            recency: BTreeMap::new(),
            next_stamp: 0,
            capacity,
        }
    }

    /// Store `score` for `key`. A full cache first evicts the least recently
    /// inserted or updated entry, even when `key` is already present (it may
    /// be the one evicted). An existing key is overwritten and becomes the
    /// most recently used.
    pub fn insert(&mut self, key: u64, score: Score, side: Color) {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        let entry = CacheEntry { score, side };

        if self.table.len() >= self.capacity {
            if let Some((_, oldest)) = self.recency.pop_first() {
                self.table.remove(&oldest);
            }
        }

        if let Some(slot) = self.table.get_mut(&key) {
            self.recency.remove(&slot.stamp);
            slot.entry = entry;
            slot.stamp = stamp;
            self.recency.insert(stamp, key);
            return;
        }

        self.table.insert(key, Slot { entry, stamp });
        self.recency.insert(stamp, key);
    }

    pub fn contains(&self, key: u64) -> bool {
        self.table.contains_key(&key)
    }

    pub fn get(&self, key: u64) -> Option<CacheEntry> {
        self.table.get(&key).map(|slot| slot.entry)
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.recency.clear();
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
