//! Pseudo-legal move generation
//!
//! Generates candidate moves that satisfy piece-movement shape rules only,
//! ignoring whether the mover's own king is left in check. Legality filtering
//! lives in [`legal_moves`](crate::api::legal_moves), which applies each
//! candidate and consults [`attack::is_square_attacked`].
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double-step and diagonal captures
//! - `knight` - L-shape offset table
//! - `king` - single-step offset table
//! - `sliding` - bishop/rook/queen ray walking
//! - `attack` - square attack detection and check queries

mod king;
mod knight;
mod pawn;
mod sliding;

pub mod attack;

pub use attack::{find_king, is_in_check, is_square_attacked};

use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::types::{Color, Game, Move, PieceKind, Square};

/// Generate all pseudo-legal moves for `color`.
///
/// Walks every occupied square owned by `color` and dispatches on the piece
/// kind. The match is exhaustive: a new piece kind will not compile until it
/// generates moves here.
pub fn generate_pseudo_moves(game: &Game, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in 0..64 {
        let Some(piece) = game.board[from as usize] else {
            continue;
        };
        if piece.color != color {
            continue;
        }
        let from = from as Square;

        match piece.kind {
            PieceKind::Pawn => pawn::generate(game, from, color, &mut moves),
            PieceKind::Knight => knight::generate(game, from, color, &mut moves),
            PieceKind::King => king::generate(game, from, color, &mut moves),
            PieceKind::Bishop => sliding::generate(game, from, color, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => sliding::generate(game, from, color, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => sliding::generate(game, from, color, &QUEEN_DIRS, &mut moves),
        }
    }

    moves
}
