//! Sliding piece move generation
//!
//! Shared ray walker for bishops, rooks and queens. The piece kinds differ
//! only in their direction tables ([`BISHOP_DIRS`](crate::constants::BISHOP_DIRS),
//! [`ROOK_DIRS`](crate::constants::ROOK_DIRS),
//! [`QUEEN_DIRS`](crate::constants::QUEEN_DIRS)).
//!
//! Each ray is walked square by square until a piece is hit (an enemy yields
//! a capture, then the ray stops either way) or the board edge is reached.
//! Working in (col, row) coordinates makes edge detection a bounds check, so
//! rays cannot wrap around the board the way raw index arithmetic would.

use crate::board::{pos_to_square, square_to_pos};
use crate::types::{Color, Game, Move, MoveKind, Square};

/// Append pseudo-legal moves along each direction in `dirs` to `moves`.
pub fn generate(game: &Game, from: Square, color: Color, dirs: &[(i8, i8)], moves: &mut Vec<Move>) {
    let (col, row) = pos_to_square(from);

    for &(dr, dc) in dirs {
        let (mut to_col, mut to_row) = (col + dc, row + dr);
        while (0..8).contains(&to_col) && (0..8).contains(&to_row) {
            let to = square_to_pos(to_col, to_row);
            match game.board[to as usize] {
                None => moves.push(Move::new(from, to, MoveKind::Quiet)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::new(from, to, MoveKind::Capture));
                    }
                    break;
                }
            }
            to_col += dc;
            to_row += dr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{load_position, new_game};
    use crate::board::square_to_pos;
    use crate::constants::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};

    fn moves_with(game: &Game, from: Square, dirs: &[(i8, i8)]) -> Vec<Move> {
        let mut moves = Vec::new();
        generate(game, from, Color::White, dirs, &mut moves);
        moves
    }

    #[test]
    fn test_rook_on_empty_board_has_fourteen_moves() {
        let mut game = new_game();
        load_position(&mut game, "7k/8/8/8/3R4/8/8/7K w").unwrap();
        let moves = moves_with(&game, square_to_pos(3, 4), &ROOK_DIRS);
        assert_eq!(moves.len(), 14, "7 along the rank + 7 along the file");
    }

    #[test]
    fn test_bishop_in_the_corner_has_seven_moves() {
        let mut game = new_game();
        load_position(&mut game, "7k/8/8/8/8/8/8/B6K w").unwrap();
        let moves = moves_with(&game, square_to_pos(0, 7), &BISHOP_DIRS);
        assert_eq!(moves.len(), 7, "a1 bishop sees the full long diagonal");
    }

    #[test]
    fn test_queen_combines_rook_and_bishop_rays() {
        let mut game = new_game();
        load_position(&mut game, "7k/8/8/8/3Q4/8/8/7K w").unwrap();
        let rook_like = moves_with(&game, square_to_pos(3, 4), &ROOK_DIRS).len();
        let bishop_like = moves_with(&game, square_to_pos(3, 4), &BISHOP_DIRS).len();
        let queen = moves_with(&game, square_to_pos(3, 4), &QUEEN_DIRS).len();
        assert_eq!(queen, rook_like + bishop_like);
    }

    #[test]
    fn test_ray_stops_at_capture() {
        let mut game = new_game();
        // Black pawn on d6 blocks the d-file; squares behind it are dark.
        load_position(&mut game, "7k/8/3p4/8/3R4/8/8/7K w").unwrap();
        let moves = moves_with(&game, square_to_pos(3, 4), &ROOK_DIRS);
        let d6 = square_to_pos(3, 2);
        let d7 = square_to_pos(3, 1);
        assert!(moves.iter().any(|m| m.to == d6 && m.is_capture()));
        assert!(
            moves.iter().all(|m| m.to != d7),
            "ray must not continue past the captured piece"
        );
    }

    #[test]
    fn test_ray_stops_before_own_piece() {
        let game = new_game();
        // a1 rook at the start: own pawn on a2 and knight on b1 block both rays.
        let moves = moves_with(&game, square_to_pos(0, 7), &ROOK_DIRS);
        assert!(moves.is_empty());
    }
}
