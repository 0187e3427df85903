// Zobrist hashing of board occupancy
//
// One random key per (square, piece kind). A fingerprint is the XOR of the keys
// of every occupied square, so it does not depend on visiting order. The side
// to move is not folded in; cache entries carry it separately.

use crate::board::{Color, Piece, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Piece kinds per square: yellow pawn, yellow king, black pawn, black king
const KINDS: usize = 4;

#[inline]
fn kind_index(p: &Piece) -> usize {
    let mut index = 0;
    if p.king {
        index += 1;
    }
    if p.color == Color::Black {
        index += 2;
    }
    index
}

/// Key table for one board geometry. Generate once and keep it for the whole
/// session: a fresh table makes every stored fingerprint meaningless.
#[derive(Debug, Clone)]
pub struct ZobristKeys {
    width: u8,
    height: u8,
    table: Vec<[u64; KINDS]>,
}

impl ZobristKeys {
    /// Keys drawn from the thread-local generator
    pub fn new(width: u8, height: u8) -> Self {
        Self::from_rng(width, height, &mut rand::thread_rng())
    }

    /// Reproducible keys
    pub fn with_seed(width: u8, height: u8, seed: u64) -> Self {
        Self::from_rng(width, height, &mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng>(width: u8, height: u8, rng: &mut R) -> Self {
        let squares = width as usize * height as usize;
        let table = (0..squares)
            .map(|_| {
                let mut keys = [0u64; KINDS];
                rng.fill(&mut keys[..]);
                keys
            })
            .collect();
        Self {
            width,
            height,
            table,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn key(&self, p: &Piece) -> u64 {
        self.table[p.square.index(self.width)][kind_index(p)]
    }

    pub fn hash(&self, pos: &Position) -> u64 {
        debug_assert_eq!((pos.width(), pos.height()), (self.width, self.height));
        pos.pieces().fold(0u64, |h, p| h ^ self.key(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_hash_independent_of_placement_order() {
        let keys = ZobristKeys::with_seed(8, 8, 7);

        let mut a = Position::empty(8, 8, Color::Yellow);
        a.set_piece(Square::new(1, 1), Color::Yellow, false);
        a.set_piece(Square::new(6, 2), Color::Black, true);
        a.set_piece(Square::new(3, 5), Color::Black, false);

        let mut b = Position::empty(8, 8, Color::Black);
        b.set_piece(Square::new(3, 5), Color::Black, false);
        b.set_piece(Square::new(6, 2), Color::Black, true);
        b.set_piece(Square::new(1, 1), Color::Yellow, false);

        assert_eq!(keys.hash(&a), keys.hash(&b));
    }

    #[test]
    fn test_hash_changes_with_occupant() {
        let keys = ZobristKeys::with_seed(8, 8, 99);
        let start = Position::standard();
        let base = keys.hash(&start);

        let mut crowned = start.clone();
        crowned.set_piece(Square::new(0, 1), Color::Yellow, true);
        assert_ne!(keys.hash(&crowned), base);

        let mut emptied = start.clone();
        emptied.clear_square(Square::new(0, 1));
        assert_ne!(keys.hash(&emptied), base);

        assert_eq!(keys.hash(&Position::empty(8, 8, Color::Yellow)), 0);
    }

    #[test]
    fn test_seeded_tables_repeat() {
        let pos = Position::standard();
        let a = ZobristKeys::with_seed(8, 8, 1234);
        let b = ZobristKeys::with_seed(8, 8, 1234);
        assert_eq!(a.hash(&pos), b.hash(&pos));
    }
}
