//! Search parameters and configuration
//!
//! Search always runs to a fixed depth; there is no time or node budget.

use super::tt::DEFAULT_CAPACITY;

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum search depth in plies
    pub max_depth: u8,

    /// Transposition cache capacity in entries
    pub cache_capacity: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 4,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in plies
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set transposition cache capacity
    pub fn cache_capacity(mut self, entries: usize) -> Self {
        self.cache_capacity = entries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let params = SearchParams::new().max_depth(6).cache_capacity(128);
        assert_eq!(params.max_depth, 6);
        assert_eq!(params.cache_capacity, 128);
        assert_eq!(SearchParams::default().max_depth, 4);
    }
}
