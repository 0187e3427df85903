// Direction deltas and precomputed ray lengths for move generation

use crate::board::{Color, Square};

/// Orthogonal step directions. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

// Yellow starts near row 0 and advances south; black the other way.
// A pawn may step in every direction except back toward its own side.
const YELLOW_PAWN_DIRECTIONS: [Direction; 3] = [Direction::South, Direction::East, Direction::West];
const BLACK_PAWN_DIRECTIONS: [Direction; 3] = [Direction::North, Direction::East, Direction::West];

impl Direction {
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

#[inline]
pub fn pawn_directions(color: Color) -> &'static [Direction; 3] {
    match color {
        Color::Yellow => &YELLOW_PAWN_DIRECTIONS,
        Color::Black => &BLACK_PAWN_DIRECTIONS,
    }
}

/// Number of squares between each square and the board edge, per direction.
///
/// Built once per board geometry; bounds every king scan so the inner loop
/// never has to test for leaving the board.
#[derive(Debug, Clone)]
pub struct RayTable {
    width: u8,
    height: u8,
    lengths: Vec<[u8; 4]>,
}

impl RayTable {
    pub fn new(width: u8, height: u8) -> Self {
        let mut lengths = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                lengths.push([y, width - 1 - x, height - 1 - y, x]);
            }
        }
        Self {
            width,
            height,
            lengths,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Squares available from `sq` before the edge in direction `dir`
    #[inline]
    pub fn length(&self, sq: Square, dir: Direction) -> u8 {
        self.lengths[sq.index(self.width)][dir as usize]
    }

    /// The square `steps` away from `sq` along `dir`, if still on the board
    #[inline]
    pub fn step(&self, sq: Square, dir: Direction, steps: u8) -> Option<Square> {
        if steps > self.length(sq, dir) {
            return None;
        }
        let (dx, dy) = dir.delta();
        let n = steps as i32;
        Some(Square::new(
            (sq.x as i32 + dx * n) as u8,
            (sq.y as i32 + dy * n) as u8,
        ))
    }
}
