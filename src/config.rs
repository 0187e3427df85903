//! Game configuration
//!
//! Board geometry, the opening position, who moves first and how hard the
//! engine searches. Defaults give the standard 8x8 game with black to move.

use crate::board::{Color, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, START_POSITION};
use crate::error::{GameError, GameResult};
use crate::search::SearchParams;

pub const MIN_SIDE: u8 = 2;
pub const MAX_SIDE: u8 = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board columns
    pub width: u8,

    /// Board rows
    pub height: u8,

    /// Opening position in board encoding
    pub initial_position: String,

    /// Side to move in the opening position
    pub starting_side: Color,

    /// Search depth and cache size
    pub search: SearchParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_position: START_POSITION.to_string(),
            starting_side: Color::Black,
            search: SearchParams::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u8) -> Self {
        self.height = height;
        self
    }

    pub fn initial_position(mut self, encoding: impl Into<String>) -> Self {
        self.initial_position = encoding.into();
        self
    }

    pub fn starting_side(mut self, side: Color) -> Self {
        self.starting_side = side;
        self
    }

    pub fn search_depth(mut self, depth: u8) -> Self {
        self.search = self.search.max_depth(depth);
        self
    }

    pub fn cache_capacity(mut self, entries: usize) -> Self {
        self.search = self.search.cache_capacity(entries);
        self
    }

    pub fn validate(&self) -> GameResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_SIDE..=MAX_SIDE).contains(&value) {
                return Err(GameError::InvalidConfig {
                    message: format!("{name} must be between {MIN_SIDE} and {MAX_SIDE}, got {value}"),
                });
            }
        }
        if self.search.max_depth == 0 {
            return Err(GameError::InvalidConfig {
                message: "search depth must be at least 1".to_string(),
            });
        }
        if self.search.cache_capacity == 0 {
            return Err(GameError::InvalidConfig {
                message: "cache capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Decode the opening position
    pub fn initial(&self) -> Position {
        Position::from_encoding(&self.initial_position, self.width, self.height, self.starting_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial(), Position::standard());
    }

    #[test]
    fn test_rejects_bad_geometry_and_depth() {
        assert!(matches!(
            GameConfig::new().width(1).validate(),
            Err(GameError::InvalidConfig { .. })
        ));
        assert!(GameConfig::new().height(27).validate().is_err());
        assert!(GameConfig::new().search_depth(0).validate().is_err());
        assert!(GameConfig::new().cache_capacity(0).validate().is_err());
        assert!(GameConfig::new().width(10).height(10).validate().is_ok());
    }
}
