//! Host-facing engine
//!
//! Bundles the turn controller (committed game) with a search engine. Search
//! always runs on copies, so a host can ask for analysis and then commit
//! whichever move it likes.

use crate::board::{Color, Move, PieceCounts, Position, Square};
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::eval::Score;
use crate::game::TurnController;
use crate::search::SearchEngine;

pub struct Engine {
    turn: TurnController,
    search: SearchEngine,
    config: GameConfig,
}

impl Engine {
    /// Build an engine on the configured opening position
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let turn = TurnController::new(config.initial());
        let search = SearchEngine::new(config.width, config.height, config.search.clone());
        Ok(Self {
            turn,
            search,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn position(&self) -> &Position {
        self.turn.position()
    }

    pub fn counts(&self) -> PieceCounts {
        self.turn.counts()
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    /// Entries currently held by the transposition cache
    pub fn cache_len(&self) -> usize {
        self.search.cache().size()
    }

    /// Recompute the legal moves of the side to move
    pub fn initialize_turn(&mut self) {
        self.turn.initialize_turn();
    }

    /// Load a host-supplied position
    pub fn load(&mut self, encoding: &str, side: Color) {
        let pos = Position::from_encoding(encoding, self.config.width, self.config.height, side);
        self.turn.set_position(pos);
    }

    pub fn legal_moves_from(&self, sq: Square) -> &[Move] {
        self.turn.legal_moves_from(sq)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.turn.index().iter().cloned().collect()
    }

    pub fn apply_move(&mut self, mv: &Move) -> GameResult<PieceCounts> {
        self.turn.apply_move(mv)
    }

    pub fn play(&mut self, from: Square, to: Square) -> GameResult<PieceCounts> {
        self.turn.play(from, to)
    }

    /// Static score of the committed position for its side to move
    pub fn evaluate(&self) -> Score {
        self.search.evaluate(self.turn.position())
    }

    /// Search score of the committed position for its side to move
    pub fn search(&mut self, depth: u8) -> Score {
        self.search.search(self.turn.position(), depth)
    }

    /// Best move at `depth` without committing it
    pub fn best_move(&mut self, depth: u8) -> Option<(Move, Score)> {
        self.search.best_move(self.turn.position(), depth)
    }

    /// Search at the configured depth and commit the chosen move. Returns
    /// `None` when the side to move has nothing to play.
    pub fn play_best_move(&mut self) -> GameResult<Option<(Move, PieceCounts)>> {
        let depth = self.config.search.max_depth;
        let Some((mv, score)) = self.best_move(depth) else {
            return Ok(None);
        };
        tracing::debug!(%mv, score, depth, "engine move");
        let counts = self.turn.apply_move(&mv)?;
        Ok(Some((mv, counts)))
    }
}
