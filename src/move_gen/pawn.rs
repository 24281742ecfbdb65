//! Pawn move generation
//!
//! Pawns are the only piece whose capture squares differ from their movement
//! squares:
//!
//! - **Single push**: one square forward, target must be empty.
//! - **Double push**: two squares forward, only from the color's starting
//!   rank and only if both squares ahead are empty.
//! - **Captures**: one square diagonally forward onto an enemy piece.
//!
//! No en-passant. Promotion is not generated as a distinct move; a pawn
//! landing on the opposite back rank is replaced by a queen when the move is
//! applied (see [`make_move`](crate::api::make_move)).
//!
//! White moves toward row 0 (rank 8 sits at the top of storage order), so
//! White's forward direction is -1 row and its starting rank is row 6; Black
//! mirrors both.

use crate::board::{pos_to_square, square_to_pos};
use crate::types::{Color, Game, Move, MoveKind, Square};

/// Append pseudo-legal pawn moves from `from` to `moves`.
pub fn generate(game: &Game, from: Square, color: Color, moves: &mut Vec<Move>) {
    let (col, row) = pos_to_square(from);
    let (forward, start_row) = match color {
        Color::White => (-1i8, 6i8),
        Color::Black => (1i8, 1i8),
    };

    // Forward pushes. The single-push square gates the double push: if it is
    // occupied the pawn cannot jump over it.
    let push_row = row + forward;
    if (0..8).contains(&push_row) {
        let single = square_to_pos(col, push_row);
        if game.board[single as usize].is_none() {
            moves.push(Move::new(from, single, MoveKind::Quiet));

            if row == start_row {
                let double = square_to_pos(col, row + 2 * forward);
                if game.board[double as usize].is_none() {
                    moves.push(Move::new(from, double, MoveKind::Quiet));
                }
            }
        }

        // Diagonal captures.
        for dc in [-1i8, 1] {
            let capture_col = col + dc;
            if !(0..8).contains(&capture_col) {
                continue;
            }
            let target = square_to_pos(capture_col, push_row);
            if let Some(victim) = game.board[target as usize] {
                if victim.color != color {
                    moves.push(Move::new(from, target, MoveKind::Capture));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{load_position, new_game};
    use crate::board::square_to_pos;

    fn pawn_moves(game: &Game, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        generate(game, from, color, &mut moves);
        moves
    }

    #[test]
    fn test_pawn_single_and_double_push_from_start() {
        let game = new_game();
        let e2 = square_to_pos(4, 6);
        let moves = pawn_moves(&game, e2, Color::White);
        assert_eq!(moves.len(), 2, "e2 pawn has single and double push");
        assert!(moves.iter().all(|m| m.kind == MoveKind::Quiet));
    }

    #[test]
    fn test_pawn_double_push_blocked_by_intervening_piece() {
        let mut game = new_game();
        // White knight parked on e3 blocks both e-pawn pushes.
        load_position(&mut game, "rnbqkbnr/pppppppp/8/8/8/4N3/PPPPPPPP/RNBQKB1R w").unwrap();
        let e2 = square_to_pos(4, 6);
        assert!(
            pawn_moves(&game, e2, Color::White).is_empty(),
            "blocked pawn has no forward moves"
        );
    }

    #[test]
    fn test_pawn_double_push_only_from_start_rank() {
        let mut game = new_game();
        load_position(&mut game, "7k/8/8/8/8/4P3/8/7K w").unwrap();
        let e3 = square_to_pos(4, 5);
        let moves = pawn_moves(&game, e3, Color::White);
        assert_eq!(moves.len(), 1, "advanced pawn only pushes one square");
    }

    #[test]
    fn test_pawn_diagonal_capture_only_on_enemy() {
        let mut game = new_game();
        // Black pawn on d5 is capturable from e4; e5 push stays open.
        load_position(&mut game, "7k/8/8/3p4/4P3/8/8/7K w").unwrap();
        let e4 = square_to_pos(4, 4);
        let moves = pawn_moves(&game, e4, Color::White);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to, square_to_pos(3, 3), "capture lands on d5");
    }

    #[test]
    fn test_pawn_does_not_capture_straight_ahead() {
        let mut game = new_game();
        load_position(&mut game, "7k/8/8/4p3/4P3/8/8/7K w").unwrap();
        let e4 = square_to_pos(4, 4);
        assert!(
            pawn_moves(&game, e4, Color::White).is_empty(),
            "a pawn blocked head-on has no capture forward"
        );
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let game = new_game();
        let e7 = square_to_pos(4, 1);
        let moves = pawn_moves(&game, e7, Color::Black);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.to > e7), "Black advances to higher rows");
    }
}
