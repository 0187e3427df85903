//! Static evaluation
//!
//! Two regimes:
//! - material: pawns are worth a base value plus a bonus per row advanced,
//!   kings a fixed higher value plus a positional bias;
//! - endgame (one side is down to kings only): pieces are scored by how far
//!   they stand from every enemy piece, so the side with more kings closes in
//!   and the other side runs.
//!
//! The difference between the two sides is divided by the number of pieces on
//! the board, so trades matter more as the board empties.

use crate::board::{Color, Piece, Position};

pub type Score = i32;

/// Score of a side with no legal move
pub const LOSS_SCORE: Score = 1_000_000;

/// Open search window bound, strictly outside every reachable score
pub const INFINITY: Score = 2_000_000;

// Values in thousandths of a pawn
const PAWN_VALUE: i64 = 1000;
const ADVANCE_BONUS: i64 = 100;
const KING_VALUE: i64 = 3000;
const KING_BIAS: i64 = 250;

// Distances are summed in hundredths of a square
const DISTANCE_SCALE: f64 = 100.0;

/// Evaluate `pos` from the point of view of `perspective` (positive is good for it)
pub fn evaluate(pos: &Position, perspective: Color) -> Score {
    let counts = pos.counts();
    let total = counts.total() as i64;
    if total == 0 {
        return 0;
    }

    let side = pos.side_to_move();
    let endgame = counts.all_kings(Color::Yellow) || counts.all_kings(Color::Black);
    let value = |color| {
        if endgame {
            endgame_value(pos, color)
        } else {
            material_value(pos, color)
        }
    };

    let raw = (value(side) - value(side.opponent())) / total;
    let score = raw.clamp(-(LOSS_SCORE as i64 - 1), LOSS_SCORE as i64 - 1) as Score;

    if perspective == side {
        score
    } else {
        -score
    }
}

fn material_value(pos: &Position, color: Color) -> i64 {
    let back_rank = color.back_rank(pos.height()) as i64;
    pos.pieces_of(color)
        .map(|p| {
            if p.king {
                KING_VALUE + KING_BIAS
            } else {
                PAWN_VALUE + ADVANCE_BONUS * (p.square.y as i64 - back_rank).abs()
            }
        })
        .sum()
}

fn endgame_value(pos: &Position, color: Color) -> i64 {
    let counts = pos.counts();
    let enemies: Vec<Piece> = pos.pieces_of(color.opponent()).collect();
    let spread: i64 = pos
        .pieces_of(color)
        .map(|own| enemies.iter().map(|e| distance_sum(&own, e)).sum::<i64>())
        .sum();

    // The stronger side wants distance to shrink
    if counts.kings_of(color) >= counts.kings_of(color.opponent()) {
        -spread
    } else {
        spread
    }
}

/// Manhattan + Chebyshev + Euclidean distance, scaled
fn distance_sum(a: &Piece, b: &Piece) -> i64 {
    let dx = (a.square.x as f64 - b.square.x as f64).abs();
    let dy = (a.square.y as f64 - b.square.y as f64).abs();
    let manhattan = dx + dy;
    let chebyshev = dx.max(dy);
    let euclidean = (dx * dx + dy * dy).sqrt();
    ((manhattan + chebyshev + euclidean) * DISTANCE_SCALE).round() as i64
}
