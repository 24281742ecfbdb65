//! Error types for the chess engine
//!
//! All failures are local and synchronous: this is a pure computation core
//! with no I/O, so there are no retries or partial-failure semantics.

use thiserror::Error;

use crate::types::Color;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Position-setup input could not be parsed into a consistent board.
    #[error("malformed position: {reason}")]
    MalformedPosition { reason: String },

    /// `undo_move` was called with no applied move left to undo.
    #[error("undo requested with empty move history")]
    EmptyHistory,

    /// `find_best_move` was called on a terminal position. The caller must
    /// check `game_state` first.
    #[error("no legal moves for {color:?}; check game state before searching")]
    NoLegalMoves { color: Color },

    /// Negative search depth requested.
    #[error("invalid search depth {depth}; depth must be non-negative")]
    InvalidDepth { depth: i32 },

    /// Difficulty label not recognized by the depth mapping.
    #[error("unknown difficulty label {label:?}")]
    UnknownDifficulty { label: String },
}

/// Result type alias for chess engine operations
pub type EngineResult<T> = Result<T, EngineError>;
