//! Engine constants: material values, direction tables and the starting
//! position setup.

use crate::types::{Board, Color, Piece, PieceKind};

/// Material value of a pawn, in centipawns.
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

/// Score assigned to being checkmated, before the depth bias that makes the
/// search prefer faster mates.
pub const MATE_SCORE: i32 = KING_VALUE;

/// Sentinel larger than any reachable evaluation; used as the initial
/// alpha-beta window.
pub const SCORE_INF: i32 = 1_000_000;

/// Knight L-shape offsets as (row delta, col delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King single-step offsets as (row delta, col delta).
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Bishop ray directions.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Rook ray directions.
pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen ray directions (bishop + rook).
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Standard starting position in placement notation, White to move.
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const __: Option<Piece> = None;
const WP: Option<Piece> = Some(Piece::new(PieceKind::Pawn, Color::White));
const WN: Option<Piece> = Some(Piece::new(PieceKind::Knight, Color::White));
const WB: Option<Piece> = Some(Piece::new(PieceKind::Bishop, Color::White));
const WR: Option<Piece> = Some(Piece::new(PieceKind::Rook, Color::White));
const WQ: Option<Piece> = Some(Piece::new(PieceKind::Queen, Color::White));
const WK: Option<Piece> = Some(Piece::new(PieceKind::King, Color::White));
const BP: Option<Piece> = Some(Piece::new(PieceKind::Pawn, Color::Black));
const BN: Option<Piece> = Some(Piece::new(PieceKind::Knight, Color::Black));
const BB: Option<Piece> = Some(Piece::new(PieceKind::Bishop, Color::Black));
const BR: Option<Piece> = Some(Piece::new(PieceKind::Rook, Color::Black));
const BQ: Option<Piece> = Some(Piece::new(PieceKind::Queen, Color::Black));
const BK: Option<Piece> = Some(Piece::new(PieceKind::King, Color::Black));

/// Standard starting setup. Row 0 is rank 8, so Black sits at the top of the
/// array and White at the bottom.
#[rustfmt::skip]
pub const SETUP: Board = [
    BR, BN, BB, BQ, BK, BB, BN, BR,
    BP, BP, BP, BP, BP, BP, BP, BP,
    __, __, __, __, __, __, __, __,
    __, __, __, __, __, __, __, __,
    __, __, __, __, __, __, __, __,
    __, __, __, __, __, __, __, __,
    WP, WP, WP, WP, WP, WP, WP, WP,
    WR, WN, WB, WQ, WK, WB, WN, WR,
];

/// Board in the standard starting position.
#[inline]
pub fn init_board() -> Board {
    SETUP
}
