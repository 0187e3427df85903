//! Search statistics
//!
//! Tracks nodes visited, beta cutoffs, cache stores and timing for one
//! root search.

use std::time::{Duration, Instant};

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes searched
    pub nodes: u64,

    /// Leaf evaluations (depth exhausted)
    pub leaves: u64,

    /// Alpha-beta cutoffs
    pub cutoffs: u64,

    /// Transposition cache stores
    pub cache_stores: u64,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
        }
    }

    #[inline]
    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn inc_leaf(&mut self) {
        self.leaves += 1;
    }

    #[inline]
    pub fn inc_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    #[inline]
    pub fn inc_cache_store(&mut self) {
        self.cache_stores += 1;
    }

    /// Nodes per second over the last timed search
    pub fn nps(&self) -> u64 {
        let micros = self.search_time.as_micros() as u64;
        if micros == 0 {
            0
        } else {
            self.nodes * 1_000_000 / micros
        }
    }
}
