//! Turn bookkeeping for the committed game
//!
//! The controller owns the one shared position. After every commit it
//! regenerates the legal moves of the new side to move and files them by
//! origin square, which is what a board UI asks for when a piece is clicked.

use crate::board::{Move, PieceCounts, Position, Square};
use crate::error::{GameError, GameResult};
use crate::movegen::generate_moves;
use crate::utils::RayTable;
use std::collections::{HashMap, HashSet};

/// Legal moves of the side to move, grouped by origin square. Iteration
/// follows generation order.
#[derive(Debug, Clone, Default)]
pub struct MoveIndex {
    moves: Vec<Move>,
    by_origin: HashMap<Square, Vec<Move>>,
}

impl MoveIndex {
    pub fn build(pos: &Position, rays: &RayTable) -> Self {
        let moves = generate_moves(pos, rays);
        let mut by_origin: HashMap<Square, Vec<Move>> = HashMap::new();
        for mv in &moves {
            by_origin.entry(mv.from()).or_default().push(mv.clone());
        }
        Self { moves, by_origin }
    }

    pub fn moves_from(&self, sq: Square) -> &[Move] {
        self.by_origin.get(&sq).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves_from(mv.from()).contains(mv)
    }

    /// Squares holding a piece that can move, in generation order
    pub fn origins(&self) -> impl Iterator<Item = Square> + '_ {
        let mut seen = HashSet::new();
        self.moves
            .iter()
            .map(Move::from)
            .filter(move |sq| seen.insert(*sq))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Owner of the committed position and its move index
#[derive(Debug, Clone)]
pub struct TurnController {
    position: Position,
    rays: RayTable,
    index: MoveIndex,
}

impl TurnController {
    pub fn new(position: Position) -> Self {
        let rays = RayTable::new(position.width(), position.height());
        let index = MoveIndex::build(&position, &rays);
        Self {
            position,
            rays,
            index,
        }
    }

    /// Rebuild the move index for the current side to move
    pub fn initialize_turn(&mut self) {
        self.index = MoveIndex::build(&self.position, &self.rays);
    }

    /// Replace the committed position wholesale (e.g. after decoding one from the host)
    pub fn set_position(&mut self, position: Position) {
        if (position.width(), position.height()) != (self.rays.width(), self.rays.height()) {
            self.rays = RayTable::new(position.width(), position.height());
        }
        self.position = position;
        self.initialize_turn();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn counts(&self) -> PieceCounts {
        self.position.counts()
    }

    pub fn index(&self) -> &MoveIndex {
        &self.index
    }

    /// Legal moves starting on `sq`; empty when there are none
    pub fn legal_moves_from(&self, sq: Square) -> &[Move] {
        self.index.moves_from(sq)
    }

    /// Commit `mv` for the side to move and return the new piece counts.
    /// A move outside the current index is rejected and nothing changes.
    pub fn apply_move(&mut self, mv: &Move) -> GameResult<PieceCounts> {
        if !self.index.contains(mv) {
            tracing::warn!(%mv, "rejected move not in the legal move index");
            return Err(GameError::UnknownMove);
        }
        Ok(self.commit(mv.clone()))
    }

    /// Commit the first legal move from `from` that stops on `to`
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<PieceCounts> {
        let chosen = self
            .legal_moves_from(from)
            .iter()
            .find(|mv| mv.landings().contains(&to))
            .cloned();
        match chosen {
            Some(mv) => Ok(self.commit(mv)),
            None => {
                tracing::warn!(%from, %to, "rejected illegal move");
                Err(GameError::IllegalMove { from, to })
            }
        }
    }

    fn commit(&mut self, mv: Move) -> PieceCounts {
        let mover = self.position.side_to_move();
        self.position.make_move(&mv);
        self.initialize_turn();
        let counts = self.position.counts();
        tracing::trace!(
            side = %mover,
            %mv,
            captured = mv.captured().len(),
            yellow = counts.yellow,
            black = counts.black,
            "move committed"
        );
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_index_groups_by_origin() {
        let turn = TurnController::new(Position::standard());
        // Each black front-row pawn can only step north
        assert_eq!(turn.index().len(), 8);
        for x in 0..8 {
            let moves = turn.legal_moves_from(Square::new(x, 5));
            assert_eq!(moves.len(), 1);
            assert_eq!(moves[0].to(), Square::new(x, 4));
        }
        assert!(turn.legal_moves_from(Square::new(0, 0)).is_empty());
    }

    #[test]
    fn test_index_keeps_generation_order() {
        let pos = Position::from_encoding("8/8/2y5/8/5y2/8/3b4/Y7", 8, 8, Color::Yellow);
        let rays = RayTable::new(8, 8);
        let index = MoveIndex::build(&pos, &rays);

        let generated = generate_moves(&pos, &rays);
        let listed: Vec<Move> = index.iter().cloned().collect();
        assert_eq!(listed, generated);

        let mut origins: Vec<Square> = generated.iter().map(Move::from).collect();
        origins.dedup();
        assert_eq!(index.origins().collect::<Vec<_>>(), origins);
    }

    #[test]
    fn test_index_rebuilt_for_next_side() {
        let mut turn = TurnController::new(Position::standard());
        turn.play(Square::new(3, 5), Square::new(3, 4)).expect("legal step");
        assert_eq!(turn.position().side_to_move(), Color::Yellow);
        assert!(turn.index().iter().all(|m| {
            turn.position().piece_at(m.from()).map(|p| p.color) == Some(Color::Yellow)
        }));
    }
}
