//! Knight move generation
//!
//! Knights jump directly to each of the eight L-shape targets; board
//! occupancy between source and target is irrelevant.

use crate::board::{pos_to_square, square_to_pos};
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Color, Game, Move, MoveKind, Square};

/// Append pseudo-legal knight moves from `from` to `moves`.
///
/// Each offset target is kept when it is on the board and either empty
/// (quiet move) or holding an enemy piece (capture).
pub fn generate(game: &Game, from: Square, color: Color, moves: &mut Vec<Move>) {
    let (col, row) = pos_to_square(from);

    for (dr, dc) in KNIGHT_OFFSETS {
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
