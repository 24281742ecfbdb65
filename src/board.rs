//! Board utilities and position parsing
//!
//! Square indexing helpers plus the rank-by-rank placement parser used by
//! [`load_position`](crate::api::load_position).
//!
//! Squares are linear indices 0-63 in row-major order. Row 0 is rank 8, the
//! top of the board as Black sees their back rank in storage order; White's
//! pieces start on rows 6 and 7.

use crate::error::{EngineError, EngineResult};
use crate::types::{Board, Color, Piece, PieceKind, Square};

/// Convert column and row to a linear square index.
#[inline]
pub fn square_to_pos(col: i8, row: i8) -> Square {
    row * 8 + col
}

/// Convert a linear square index to (col, row).
#[inline]
pub fn pos_to_square(pos: Square) -> (i8, i8) {
    (pos % 8, pos / 8)
}

/// Check if square coordinates are on the board.
#[inline]
pub fn is_valid_square(col: i8, row: i8) -> bool {
    (0..8).contains(&col) && (0..8).contains(&row)
}

/// Get the piece at a square.
#[inline]
pub fn piece_at(board: &Board, pos: Square) -> Option<Piece> {
    board[pos as usize]
}

/// Check if a square is empty.
#[inline]
pub fn is_empty(board: &Board, pos: Square) -> bool {
    board[pos as usize].is_none()
}

/// Check whether the piece in a slot belongs to `color`.
#[inline]
pub fn piece_belongs_to(slot: Option<Piece>, color: Color) -> bool {
    matches!(slot, Some(piece) if piece.color == color)
}

fn piece_from_char(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

/// Parse a position description into a board and side to move.
///
/// The input is standard algebraic board setup notation: eight ranks
/// separated by `/` (rank 8 first), letters for pieces (uppercase White,
/// lowercase Black), digits for runs of empty squares, followed by a side
/// token `w` or `b`. Any further whitespace-separated fields (castling,
/// en-passant, clocks from a full FEN record) are ignored, since the engine
/// tracks none of that state.
///
/// # Errors
///
/// Returns [`EngineError::MalformedPosition`] when the rank count is not
/// eight, a rank does not describe exactly eight columns, a piece letter is
/// unknown, or the side token is missing or invalid. The board is never left
/// half-updated: parsing builds a fresh board and fails before anything is
/// published.
pub fn parse_position(input: &str) -> EngineResult<(Board, Color)> {
    let mut fields = input.split_whitespace();

    let placement = fields
        .next()
        .ok_or_else(|| malformed("empty position string"))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board: Board = [None; 64];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col: i8 = 0;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run > 8 {
                    return Err(malformed(format!("invalid empty-run digit {c:?}")));
                }
                col += run as i8;
            } else {
                let piece = piece_from_char(c)
                    .ok_or_else(|| malformed(format!("unknown piece letter {c:?}")))?;
                if col >= 8 {
                    return Err(malformed(format!("rank {} overflows 8 columns", 8 - row)));
                }
                board[row * 8 + col as usize] = Some(piece);
                col += 1;
            }
            if col > 8 {
                return Err(malformed(format!("rank {} overflows 8 columns", 8 - row)));
            }
        }
        if col != 8 {
            return Err(malformed(format!(
                "rank {} describes {} columns, expected 8",
                8 - row,
                col
            )));
        }
    }

    let turn = match fields.next() {
        Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(malformed(format!("invalid side to move {other:?}"))),
        None => return Err(malformed("missing side to move")),
    };

    Ok((board, turn))
}

fn malformed(reason: impl Into<String>) -> EngineError {
    EngineError::MalformedPosition {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{init_board, START_POSITION};

    #[test]
    fn test_parse_starting_position_matches_setup() {
        let (board, turn) = parse_position(START_POSITION).unwrap();
        assert_eq!(board, init_board(), "parsed start should equal SETUP");
        assert_eq!(turn, Color::White);
    }

    #[test]
    fn test_parse_ignores_trailing_fen_fields() {
        let (board, turn) =
            parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board, init_board());
        assert_eq!(turn, Color::White);
    }

    #[test]
    fn test_parse_black_to_move() {
        let (_, turn) = parse_position("7k/8/8/8/8/8/8/7K b").unwrap();
        assert_eq!(turn, Color::Black);
    }

    #[test]
    fn test_parse_rejects_wrong_rank_count() {
        let err = parse_position("8/8/8/8 w").unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_piece_letter() {
        let err = parse_position("7x/8/8/8/8/8/8/8 w").unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));
    }

    #[test]
    fn test_parse_rejects_short_rank() {
        let err = parse_position("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));
    }

    #[test]
    fn test_parse_rejects_overfull_rank() {
        let err = parse_position("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w").unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_side() {
        let err = parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));
    }

    #[test]
    fn test_square_round_trip() {
        for pos in 0..64i8 {
            let (col, row) = pos_to_square(pos);
            assert_eq!(square_to_pos(col, row), pos);
            assert!(is_valid_square(col, row));
        }
        assert!(!is_valid_square(-1, 0));
        assert!(!is_valid_square(0, 8));
    }
}
