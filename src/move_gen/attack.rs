//! Attack detection and check queries
//!
//! [`is_square_attacked`] is the engine's only check-detection primitive. It
//! inspects the board outward from the target square: pawn-attack offsets,
//! knight-leap offsets, then sliding rays classified as diagonal or
//! orthogonal. It deliberately never calls move generation, which keeps the
//! legality filter in [`legal_moves`](crate::api::legal_moves) from recursing
//! back into itself.
//!
//! An enemy king registers as attacking any adjacent square on both ray
//! classes at distance 1. That keeps opposing kings from ever standing next
//! to each other, since such a move would be filtered as moving into check.

use crate::board::{pos_to_square, square_to_pos};
use crate::constants::{BISHOP_DIRS, KNIGHT_OFFSETS, ROOK_DIRS};
use crate::types::{Color, Game, Piece, PieceKind, Square};

/// Check whether `square` is attacked by the opponent of `defender`.
///
/// # Arguments
///
/// * `game` - The current game state
/// * `square` - Target square index (0-63)
/// * `defender` - The color defending the square; attacks are looked up for
///   its opponent
///
/// # Returns
///
/// `true` if any opposing piece attacks the square.
pub fn is_square_attacked(game: &Game, square: Square, defender: Color) -> bool {
    let attacker = defender.opponent();
    let (col, row) = pos_to_square(square);

    // Pawn attacks come from the two squares diagonally toward the attacker's
    // side: row-1 for Black pawns (they advance down the array), row+1 for
    // White pawns.
    let pawn_row = match attacker {
        Color::Black => row - 1,
        Color::White => row + 1,
    };
    if (0..8).contains(&pawn_row) {
        for dc in [-1i8, 1] {
            let pawn_col = col + dc;
            if !(0..8).contains(&pawn_col) {
                continue;
            }
            let slot = game.board[square_to_pos(pawn_col, pawn_row) as usize];
            if slot == Some(Piece::new(PieceKind::Pawn, attacker)) {
                return true;
            }
        }
    }

    // Knight leaps.
    for (dr, dc) in KNIGHT_OFFSETS {
        let (to_col, to_row) = (col + dc, row + dr);
        if !(0..8).contains(&to_col) || !(0..8).contains(&to_row) {
            continue;
        }
        let slot = game.board[square_to_pos(to_col, to_row) as usize];
        if slot == Some(Piece::new(PieceKind::Knight, attacker)) {
            return true;
        }
    }

    // Sliding rays: the first piece met on a ray decides it. Diagonal rays
    // carry bishop/queen attacks, orthogonal rays rook/queen attacks, and an
    // adjacent enemy king counts on either class.
    scan_rays(game, col, row, attacker, &BISHOP_DIRS, PieceKind::Bishop)
        || scan_rays(game, col, row, attacker, &ROOK_DIRS, PieceKind::Rook)
}

fn scan_rays(
    game: &Game,
    col: i8,
    row: i8,
    attacker: Color,
    dirs: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(dr, dc) in dirs {
        let (mut to_col, mut to_row) = (col + dc, row + dr);
        let mut dist = 1;
        while (0..8).contains(&to_col) && (0..8).contains(&to_row) {
            if let Some(piece) = game.board[square_to_pos(to_col, to_row) as usize] {
                if piece.color == attacker {
                    let slides = piece.kind == slider || piece.kind == PieceKind::Queen;
                    let adjacent_king = piece.kind == PieceKind::King && dist == 1;
                    if slides || adjacent_king {
                        return true;
                    }
                }
                break;
            }
            to_col += dc;
            to_row += dr;
            dist += 1;
        }
    }
    false
}

/// Locate the king of `color`.
///
/// Returns `None` only for positions that were never legally reachable; move
/// application cannot remove a king from the board.
pub fn find_king(game: &Game, color: Color) -> Option<Square> {
    let king = Piece::new(PieceKind::King, color);
    (0..64i8).find(|&sq| game.board[sq as usize] == Some(king))
}

/// Check whether the king of `color` is in check.
pub fn is_in_check(game: &Game, color: Color) -> bool {
    match find_king(game, color) {
        Some(king_sq) => is_square_attacked(game, king_sq, color),
        None => false,
    }
}
