//! Core types for the chess engine
//!
//! The central structure is [`Game`]: the 64-square board, the side to move
//! and the snapshot history that the search relies on to explore the game
//! tree without corrupting real game state.
//!
//! ## Board Representation
//!
//! The board is a flat array of 64 `Option<Piece>` slots in row-major order
//! (`row * 8 + col`), with row 0 holding rank 8 (Black's back rank). A `None`
//! slot is an empty square. Pieces are plain values: captures and promotion
//! replace the slot content, nothing is mutated in place.
//!
//! ## The Snapshot Invariant
//!
//! [`make_move`](crate::api::make_move) pushes a full `HistoryEntry` (board +
//! turn) before touching the board; [`undo_move`](crate::api::undo_move) pops
//! and restores it verbatim. Any sequence of N makes followed by N undos
//! therefore restores the game exactly, which is what lets the search drive
//! thousands of hypothetical make/undo cycles against the same `Game` that
//! the controller renders from.

use std::fmt;
use std::str::FromStr;

use crate::constants::init_board;
use crate::error::EngineError;

/// Linear square index, 0-63, row-major with rank 8 at index 0.
pub type Square = i8;

/// Side color. `White` is the maximizing side in evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing color.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Evaluation sign: +1 for White, -1 for Black.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind. A closed set: move generation and evaluation match on it
/// exhaustively, so adding a kind forces both to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board: kind plus owning color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}

/// Fixed-size board: one optional piece per square.
pub type Board = [Option<Piece>; 64];

/// Move classification used for ordering and scoring.
///
/// Informational only: legality and promotion are derived from the board when
/// the move is applied, not from this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
}

/// A candidate or applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Whether the ordering tag marks this move as a capture.
    #[inline]
    pub fn is_capture(self) -> bool {
        self.kind == MoveKind::Capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Full pre-move snapshot, pushed by `make_move` and popped by `undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    pub turn: Color,
}

/// Terminal classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Checkmate,
    Stalemate,
}

/// Difficulty label exposed to the controller; maps monotonically to a fixed
/// search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth for this label. Harder labels never map to a shallower
    /// depth than easier ones.
    #[inline]
    pub fn search_depth(self) -> i32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::UnknownDifficulty {
                label: other.to_string(),
            }),
        }
    }
}

/// Central game state: board, side to move, snapshot history and search
/// telemetry.
///
/// A single `Game` value is shared between real gameplay and hypothetical
/// search exploration; the search always restores it via the snapshot
/// history before returning control.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
    pub(crate) history: Vec<HistoryEntry>,

    /// Nodes visited by the last search.
    pub nodes: u64,
    /// Beta cutoffs taken by the last search.
    pub cuts: u64,
}

impl Game {
    /// Number of applied moves that can still be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: init_board(),
            turn: Color::White,
            history: Vec::new(),
            nodes: 0,
            cuts: 0,
        }
    }
}
