//! Game state queries and AI reply
//!
//! Terminal classification, the render snapshot, and the difficulty-driven
//! search entry point the controller calls on the engine's turn.

use crate::api::legal_moves;
use crate::move_gen::is_in_check;
use crate::error::EngineResult;
use crate::search::find_best_move;
use crate::types::{Board, Color, Difficulty, Game, GameState, Move};

/// Classify the position for `color`.
///
/// With no legal moves the position is terminal: `Checkmate` when the king
/// is in check, `Stalemate` otherwise. Anything else is `InProgress`. This
/// is the only draw detection the engine performs.
pub fn game_state(game: &mut Game, color: Color) -> GameState {
    if legal_moves(game, color).is_empty() {
        if is_in_check(game, color) {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        }
    } else {
        GameState::InProgress
    }
}

/// Read-only copy of the 64 board slots for rendering.
#[inline]
pub fn board_snapshot(game: &Game) -> Board {
    game.board
}

/// Compute the engine's reply for the side to move at the given difficulty.
///
/// # Errors
///
/// Propagates [`EngineError::NoLegalMoves`](crate::error::EngineError) when
/// called on a terminal position; the caller must consult [`game_state`]
/// first.
pub fn reply(game: &mut Game, difficulty: Difficulty) -> EngineResult<Move> {
    find_best_move(game, difficulty.search_depth())
}
