//! Error types for the rules engine
//!
//! Only host requests can fail: an illegal move, a square outside the board,
//! or a configuration the engine cannot play on. Malformed board encodings are
//! tolerated and never surface here.

use crate::board::Square;

/// Errors returned to the host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No legal move leads from `from` to `to` for the side to move
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The supplied move is not in the current legal move index
    #[error("move is not legal in the current position")]
    UnknownMove,

    /// Coordinates outside the configured board
    #[error("square ({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    /// Configuration rejected by validation
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
