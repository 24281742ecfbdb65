//! Material values
//!
//! Fixed per-kind weights in centipawns. The king's weight only matters as a
//! mate-scale sentinel; it can never actually be captured.

use crate::constants::{
    BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
use crate::types::PieceKind;

/// Material value of a piece kind.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_values_are_ordered() {
        assert!(piece_value(PieceKind::Pawn) < piece_value(PieceKind::Knight));
        assert!(piece_value(PieceKind::Knight) < piece_value(PieceKind::Bishop));
        assert!(piece_value(PieceKind::Bishop) < piece_value(PieceKind::Rook));
        assert!(piece_value(PieceKind::Rook) < piece_value(PieceKind::Queen));
        assert!(piece_value(PieceKind::Queen) < piece_value(PieceKind::King));
    }
}
