//! Legal move generation
//!
//! Pawns step one square forward or sideways; kings slide any distance along
//! a row or column. Captures jump an orthogonally adjacent enemy (for kings,
//! the first piece met along the line) and may be chained. Whenever a capture
//! exists only the longest chains are legal.

use crate::board::{Move, Piece, Position, Square};
use crate::utils::{pawn_directions, RayTable, ALL_DIRECTIONS};

/// All legal moves for the side to move.
///
/// The position is never modified: chain continuations are searched on
/// scratch copies, one per jump.
pub fn generate_moves(pos: &Position, rays: &RayTable) -> Vec<Move> {
    let side = pos.side_to_move();
    let mut moves = Vec::new();

    for piece in pos.pieces_of(side) {
        if piece.king {
            king_steps(pos, rays, piece, &mut moves);
        } else {
            pawn_steps(pos, rays, piece, &mut moves);
        }
        capture_chains(pos, rays, piece, &Move::chain_root(piece.square), &mut moves);
    }

    enforce_maximal_capture(&mut moves);
    moves
}

/// Drop everything but the longest captures when any capture is available
pub fn enforce_maximal_capture(moves: &mut Vec<Move>) {
    let longest = moves
        .iter()
        .filter(|m| m.is_capture())
        .map(Move::chain_length)
        .max();
    if let Some(longest) = longest {
        moves.retain(|m| m.is_capture() && m.chain_length() == longest);
    }
}

fn pawn_steps(pos: &Position, rays: &RayTable, piece: Piece, out: &mut Vec<Move>) {
    for &dir in pawn_directions(piece.color) {
        if let Some(to) = rays.step(piece.square, dir, 1) {
            if pos.is_empty(to) {
                out.push(Move::step(piece.square, to));
            }
        }
    }
}

fn king_steps(pos: &Position, rays: &RayTable, piece: Piece, out: &mut Vec<Move>) {
    for dir in ALL_DIRECTIONS {
        for n in 1..=rays.length(piece.square, dir) {
            let Some(to) = rays.step(piece.square, dir, n) else {
                break;
            };
            if !pos.is_empty(to) {
                break;
            }
            out.push(Move::step(piece.square, to));
        }
    }
}

/// Single jumps available to `piece` as (captured enemy, landing square)
fn jumps(pos: &Position, rays: &RayTable, piece: Piece) -> Vec<(Piece, Square)> {
    let mut found = Vec::new();

    if piece.king {
        for dir in ALL_DIRECTIONS {
            let reach = rays.length(piece.square, dir);
            let mut n = 1;
            // Slide over empties up to the first occupied square
            let victim = loop {
                if n > reach {
                    break None;
                }
                match rays.step(piece.square, dir, n).and_then(|sq| pos.piece_at(sq)) {
                    Some(p) => break Some(p),
                    None => n += 1,
                }
            };
            let Some(victim) = victim else { continue };
            if victim.color == piece.color {
                continue;
            }
            // Every empty square past the victim is a separate landing
            for m in (n + 1)..=reach {
                match rays.step(piece.square, dir, m) {
                    Some(landing) if pos.is_empty(landing) => found.push((victim, landing)),
                    _ => break,
                }
            }
        }
    } else {
        for &dir in pawn_directions(piece.color) {
            let Some(over) = rays.step(piece.square, dir, 1) else {
                continue;
            };
            let Some(victim) = pos.piece_at(over) else {
                continue;
            };
            if victim.color == piece.color {
                continue;
            }
            if let Some(landing) = rays.step(piece.square, dir, 2) {
                if pos.is_empty(landing) {
                    found.push((victim, landing));
                }
            }
        }
    }

    found
}

/// Emit every capture chain that extends `prefix`, the chain so far of the
/// piece standing (on `pos`) at `piece.square`. Both each extension and its
/// own continuations are pushed; the maximal filter sorts them out later.
fn capture_chains(
    pos: &Position,
    rays: &RayTable,
    piece: Piece,
    prefix: &Move,
    out: &mut Vec<Move>,
) {
    for (victim, landing) in jumps(pos, rays, piece) {
        let chain = prefix.extended(landing, victim);

        let mut scratch = pos.clone();
        scratch.clear_square(victim.square);
        scratch.clear_square(piece.square);
        scratch.set_piece(landing, piece.color, piece.king);
        let moved = Piece {
            square: landing,
            ..piece
        };

        capture_chains(&scratch, rays, moved, &chain, out);
        out.push(chain);
    }
}
