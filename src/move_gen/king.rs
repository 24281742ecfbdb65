//! King move generation
//!
//! One step in each of the eight directions. No castling: the rule subset
//! this engine implements leaves the king to walk square by square.
//!
//! Moving into check is not filtered here; like every other generator this
//! produces pseudo-legal moves, and the king-safety filter in
//! [`legal_moves`](crate::api::legal_moves) removes self-checks.

use crate::board::{pos_to_square, square_to_pos};
use crate::constants::KING_OFFSETS;
use crate::types::{Color, Game, Move, MoveKind, Square};

/// Append pseudo-legal king moves from `from` to `moves`.
pub fn generate(game: &Game, from: Square, color: Color, moves: &mut Vec<Move>) {
    let (col, row) = pos_to_square(from);

    for (dr, dc) in KING_OFFSETS {
        let (to_col, to_row) = (col + dc, row + dr);
        if !(0..8).contains(&to_col) || !(0..8).contains(&to_row) {
            continue;
        }
        let to = square_to_pos(to_col, to_row);
        match game.board[to as usize] {
            None => moves.push(Move::new(from, to, MoveKind::Quiet)),
            Some(piece) if piece.color != color => {
                moves.push(Move::new(from, to, MoveKind::Capture))
            }
            Some(_) => {}
        }
    }
}
