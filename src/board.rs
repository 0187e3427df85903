// Square mapping: x is the column (0 = left), y is the row (0 = top row of the encoding).
// Yellow starts near row 0 and promotes on the last row; black the other way round.

use crate::error::{GameError, GameResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Yellow => Color::Black,
            Color::Black => Color::Yellow,
        }
    }

    /// Row this side's pawns start from; advancement is measured from here
    #[inline]
    pub fn back_rank(self, height: u8) -> u8 {
        match self {
            Color::Yellow => 0,
            Color::Black => height - 1,
        }
    }

    /// Row on which this side's pawns are crowned
    #[inline]
    pub fn promotion_rank(self, height: u8) -> u8 {
        self.opponent().back_rank(height)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Yellow => write!(f, "yellow"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn index(self, width: u8) -> usize {
        self.y as usize * width as usize + self.x as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A piece on the board. `square` always matches the cell holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub square: Square,
}

/// Per-side census of the board, kept in step with every mutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub yellow: u32,
    pub black: u32,
    pub yellow_kings: u32,
    pub black_kings: u32,
}

impl PieceCounts {
    #[inline]
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Yellow => self.yellow,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn kings_of(&self, color: Color) -> u32 {
        match color {
            Color::Yellow => self.yellow_kings,
            Color::Black => self.black_kings,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.yellow + self.black
    }

    /// True when every remaining piece of `color` is a king
    #[inline]
    pub fn all_kings(&self, color: Color) -> bool {
        let n = self.of(color);
        n > 0 && self.kings_of(color) == n
    }

    /// The side whose opponent has been wiped out, if any
    pub fn winner(&self) -> Option<Color> {
        match (self.yellow, self.black) {
            (0, 0) => None,
            (_, 0) => Some(Color::Yellow),
            (0, _) => Some(Color::Black),
            _ => None,
        }
    }

    fn add(&mut self, color: Color, king: bool, delta: i32) {
        let apply = |n: &mut u32| *n = (*n as i32 + delta) as u32;
        match color {
            Color::Yellow => {
                apply(&mut self.yellow);
                if king {
                    apply(&mut self.yellow_kings);
                }
            }
            Color::Black => {
                apply(&mut self.black);
                if king {
                    apply(&mut self.black_kings);
                }
            }
        }
    }
}

/// One turn: the path of the moving piece and what it captured on the way.
///
/// A plain step has exactly two squares. A capture chain has the origin
/// followed by one landing square per jump, and `captured` lists the jumped
/// pieces in the order they were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    path: Vec<Square>,
    captured: Vec<Piece>,
    capture: bool,
}

impl Move {
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            path: vec![from, to],
            captured: Vec::new(),
            capture: false,
        }
    }

    /// Start of a capture chain at `from` with nothing taken yet
    pub(crate) fn chain_root(from: Square) -> Self {
        Self {
            path: vec![from],
            captured: Vec::new(),
            capture: true,
        }
    }

    /// Copy of this chain with one more jump appended
    pub(crate) fn extended(&self, landing: Square, taken: Piece) -> Self {
        let mut next = self.clone();
        next.path.push(landing);
        next.captured.push(taken);
        next
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.path[0]
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Every square the piece stops on after leaving its origin
    #[inline]
    pub fn landings(&self) -> &[Square] {
        &self.path[1..]
    }

    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Number of landing squares
    #[inline]
    pub fn chain_length(&self) -> usize {
        self.path.len() - 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", if self.capture { " x " } else { " - " })?;
            }
            write!(f, "{}", sq)?;
        }
        Ok(())
    }
}

pub const DEFAULT_WIDTH: u8 = 8;
pub const DEFAULT_HEIGHT: u8 = 8;
pub const START_POSITION: &str = "8/yyyyyyyy/yyyyyyyy/8/8/bbbbbbbb/bbbbbbbb/8";

/// Board grid, side to move and cached piece counts.
///
/// All mutation goes through `set_piece`, `clear_square` and `make_move`, which
/// keep `counts` equal to the grid census.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    width: u8,
    height: u8,
    cells: Vec<Option<Piece>>,
    side: Color,
    counts: PieceCounts,
}

impl Position {
    pub fn empty(width: u8, height: u8, side: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            side,
            counts: PieceCounts::default(),
        }
    }

    /// Default 8x8 opening position, black to move
    pub fn standard() -> Self {
        Self::from_encoding(START_POSITION, DEFAULT_WIDTH, DEFAULT_HEIGHT, Color::Black)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn set_side_to_move(&mut self, side: Color) {
        self.side = side;
    }

    #[inline]
    pub fn counts(&self) -> PieceCounts {
        self.counts
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Checked conversion from host coordinates
    pub fn square(&self, x: i32, y: i32) -> GameResult<Square> {
        if self.contains(x, y) {
            Ok(Square::new(x as u8, y as u8))
        } else {
            Err(GameError::OffBoard { x, y })
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index(self.width)]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever stood on `sq`
    pub fn set_piece(&mut self, sq: Square, color: Color, king: bool) {
        self.clear_square(sq);
        self.cells[sq.index(self.width)] = Some(Piece {
            color,
            king,
            square: sq,
        });
        self.counts.add(color, king, 1);
    }

    /// Remove and return the piece on `sq`
    pub fn clear_square(&mut self, sq: Square) -> Option<Piece> {
        let taken = self.cells[sq.index(self.width)].take();
        if let Some(p) = taken {
            self.counts.add(p.color, p.king, -1);
        }
        taken
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Counts recomputed from the grid
    pub fn census(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for p in self.pieces() {
            counts.add(p.color, p.king, 1);
        }
        counts
    }

    /// Play `mv` for the side to move: vacate the origin, lift every captured
    /// piece, land on the last square (crowning a pawn that reaches the far
    /// row) and hand the turn over.
    ///
    /// Legality is the caller's job; a move whose origin is empty is ignored.
    pub fn make_move(&mut self, mv: &Move) {
        let Some(mover) = self.clear_square(mv.from()) else {
            debug_assert!(false, "make_move from empty square {}", mv.from());
            return;
        };
        for taken in mv.captured() {
            self.clear_square(taken.square);
        }
        let to = mv.to();
        let crowned = mover.king || to.y == mover.color.promotion_rank(self.height);
        self.set_piece(to, mover.color, crowned);
        self.side = self.side.opponent();

        debug_assert_eq!(self.counts, self.census());
    }
}

// Board encoding: one '/'-separated segment per row, top row first.
// Digits skip that many empty squares, y/Y and b/B are yellow and black pawns/kings.
impl Position {
    /// Decode a board. Unknown characters are skipped, and pieces that fall
    /// outside `width` x `height` are dropped.
    pub fn from_encoding(encoding: &str, width: u8, height: u8, side: Color) -> Self {
        let mut pos = Self::empty(width, height, side);
        let mut x: u32 = 0;
        let mut y: u32 = 0;

        for ch in encoding.chars() {
            let (color, king) = match ch {
                'y' => (Color::Yellow, false),
                'Y' => (Color::Yellow, true),
                'b' => (Color::Black, false),
                'B' => (Color::Black, true),
                '/' => {
                    y += 1;
                    x = 0;
                    continue;
                }
                _ => {
                    x += ch.to_digit(10).unwrap_or(0);
                    continue;
                }
            };
            if x < width as u32 && y < height as u32 {
                pos.set_piece(Square::new(x as u8, y as u8), color, king);
            }
            x += 1;
        }

        pos
    }

    /// Encode the board. Empty runs longer than nine are split so the
    /// output decodes back to the same grid.
    pub fn to_encoding(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            if y > 0 {
                out.push('/');
            }
            let mut run = 0u32;
            for x in 0..self.width {
                match self.piece_at(Square::new(x, y)) {
                    None => run += 1,
                    Some(p) => {
                        flush_run(&mut out, &mut run);
                        out.push(piece_char(p));
                    }
                }
            }
            flush_run(&mut out, &mut run);
        }
        out
    }
}

fn flush_run(out: &mut String, run: &mut u32) {
    while *run > 0 {
        let chunk = (*run).min(9);
        out.push(char::from_digit(chunk, 10).unwrap_or('9'));
        *run -= chunk;
    }
}

fn piece_char(p: Piece) -> char {
    match (p.color, p.king) {
        (Color::Yellow, false) => 'y',
        (Color::Yellow, true) => 'Y',
        (Color::Black, false) => 'b',
        (Color::Black, true) => 'B',
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.piece_at(Square::new(x, y)) {
                    Some(p) => write!(f, "{} ", piece_char(p))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_position_census() {
        let pos = Position::standard();
        let counts = pos.counts();
        assert_eq!(counts.yellow, 16);
        assert_eq!(counts.black, 16);
        assert_eq!(counts.yellow_kings, 0);
        assert_eq!(counts.black_kings, 0);
        assert_eq!(counts, pos.census());
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.to_encoding(), START_POSITION);
    }

    #[test]
    fn test_unknown_symbols_are_ignored() {
        let pos = Position::from_encoding("y?7/x8/Bz7", 8, 8, Color::Yellow);
        assert_eq!(pos.piece_at(Square::new(0, 0)).map(|p| p.color), Some(Color::Yellow));
        let king = pos.piece_at(Square::new(0, 2)).expect("king on (0, 2)");
        assert!(king.king);
        assert_eq!(king.color, Color::Black);
        assert_eq!(pos.counts().total(), 2);
    }

    #[test]
    fn test_overflowing_placements_are_dropped() {
        // Nine pieces on an eight-wide row, and a tenth row on an eight-row board
        let pos = Position::from_encoding("yyyyyyyyy/8/8/8/8/8/8/8/bbbb", 8, 8, Color::Yellow);
        assert_eq!(pos.counts().yellow, 8);
        assert_eq!(pos.counts().black, 0);
    }

    #[test]
    fn test_long_empty_runs_split_on_wide_boards() {
        let mut pos = Position::empty(12, 2, Color::Black);
        pos.set_piece(Square::new(11, 1), Color::Black, true);
        let enc = pos.to_encoding();
        assert_eq!(enc, "93/92B");
        assert_eq!(Position::from_encoding(&enc, 12, 2, Color::Black), pos);
    }

    #[test]
    fn test_make_move_crowns_on_far_row() {
        let mut pos = Position::from_encoding("8/8/8/8/8/8/y7/8", 8, 8, Color::Yellow);
        let mv = Move::step(Square::new(0, 6), Square::new(0, 7));
        pos.make_move(&mv);
        let p = pos.piece_at(Square::new(0, 7)).expect("piece moved");
        assert!(p.king);
        assert_eq!(p.square, Square::new(0, 7));
        assert_eq!(pos.counts().yellow_kings, 1);
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    #[test]
    fn test_make_move_removes_captured_pieces() {
        let mut pos = Position::from_encoding("y7/b7/8/b7/8/8/8/8", 8, 8, Color::Yellow);
        let black_1 = pos.piece_at(Square::new(0, 1)).unwrap();
        let black_3 = pos.piece_at(Square::new(0, 3)).unwrap();
        let mv = Move::chain_root(Square::new(0, 0))
            .extended(Square::new(0, 2), black_1)
            .extended(Square::new(0, 4), black_3);
        pos.make_move(&mv);
        assert_eq!(pos.counts().black, 0);
        assert_eq!(pos.counts().yellow, 1);
        assert!(pos.is_empty(Square::new(0, 0)));
        assert!(!pos.is_empty(Square::new(0, 4)));
    }

    #[test]
    fn test_winner_from_counts() {
        let pos = Position::from_encoding("Y7/8/8/8/8/8/8/8", 8, 8, Color::Black);
        assert_eq!(pos.counts().winner(), Some(Color::Yellow));
        assert_eq!(Position::standard().counts().winner(), None);
    }
}
