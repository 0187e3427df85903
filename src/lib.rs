pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod logging;
pub mod movegen;
pub mod search;
pub mod utils;
pub mod zobrist;

pub use board::{Color, Move, Piece, PieceCounts, Position, Square, START_POSITION};
pub use config::GameConfig;
pub use engine::Engine;
pub use error::{GameError, GameResult};
pub use eval::{evaluate, Score, INFINITY, LOSS_SCORE};
pub use game::{MoveIndex, TurnController};
pub use movegen::generate_moves;
pub use utils::RayTable;
pub use zobrist::ZobristKeys;
