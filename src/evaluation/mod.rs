//! Static position evaluation
//!
//! Sums material plus piece-square bonus over all occupied squares. Positive
//! scores favor White. The evaluation is purely static: mobility and king
//! safety are left to the search itself, which sees checkmates and
//! stalemates as terminal nodes.
//!
//! ## Module Organization
//!
//! - `material` - fixed per-kind values
//! - `pst` - piece-square tables with Black mirroring

mod material;
mod pst;

pub use material::piece_value;
pub use pst::pst_value;

use crate::types::{Board, Color};

/// Evaluate a board. Positive favors White, negative favors Black.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for square in 0..64i8 {
        if let Some(piece) = board[square as usize] {
            let value = piece_value(piece.kind) + pst_value(piece, square);
            score += match piece.color {
                Color::White => value,
                Color::Black => -value,
            };
        }
    }

    score
}
