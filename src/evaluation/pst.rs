//! Piece-square tables
//!
//! Per-square bonuses layered on top of material value. Tables exist for
//! pawns and for knights; bishops reuse the knight table (both are minor
//! pieces that want centralization and hate the rim). Rooks, queens and
//! kings contribute material value only.
//!
//! Tables are written from White's point of view with row 0 at the top of
//! the array (rank 8). Black reads the vertically mirrored square, modeling
//! symmetric strategic preferences.

use crate::board::pos_to_square;
use crate::types::{Color, Piece, PieceKind, Square};

/// Pawn bonuses: push toward promotion, hold the center, keep the shield
/// pawns back.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,   0,   0,   0,  0,  0,
    50, 50, 50,  50,  50,  50, 50, 50,
    10, 10, 20,  30,  30,  20, 10, 10,
     5,  5, 10,  25,  25,  10,  5,  5,
     0,  0,  0,  20,  20,   0,  0,  0,
     5, -5, -10,  0,   0, -10, -5,  5,
     5, 10,  10, -20, -20,  10, 10,  5,
     0,  0,  0,   0,   0,   0,  0,  0,
];

/// Minor-piece bonuses: centralize, penalize the rim.
#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

/// Vertical mirror: row r becomes row 7-r, columns unchanged.
#[inline]
fn mirror(square: Square) -> usize {
    let (col, row) = pos_to_square(square);
    ((7 - row) * 8 + col) as usize
}

/// Positional bonus for `piece` standing on `square`.
///
/// Kinds without a table contribute zero; the match is exhaustive so a new
/// piece kind must decide its table here.
pub fn pst_value(piece: Piece, square: Square) -> i32 {
    let idx = match piece.color {
        Color::White => square as usize,
        Color::Black => mirror(square),
    };
    match piece.kind {
        PieceKind::Pawn => PAWN_TABLE[idx],
        PieceKind::Knight | PieceKind::Bishop => KNIGHT_TABLE[idx],
        PieceKind::Rook | PieceKind::Queen | PieceKind::King => 0,
    }
}
