//! Search engine for ortho_draughts
//!
//! Fixed-depth alpha-beta over value copies of the position, with a bounded
//! transposition cache.

pub mod params;
pub mod search;
pub mod stats;
pub mod tt;

pub use self::params::SearchParams;
pub use self::search::SearchEngine;
pub use self::stats::SearchStats;
pub use self::tt::{CacheEntry, TranspositionCache};
pub use crate::board::Move;
