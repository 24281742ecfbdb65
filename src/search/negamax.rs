//! Negamax search with alpha-beta pruning
//!
//! Plain recursion: each call scores the position from the side to move's
//! perspective and negates the child's result on the way up. Recursion depth
//! is bounded by the requested search depth (single digits in practice), so
//! the call stack is the natural and safe home for search state.
//!
//! The search explores the game tree by driving [`make_move`]/[`undo_move`]
//! cycles against the live `Game`; the snapshot history guarantees the board
//! is bit-identical when the search returns.

use tracing::debug;

use super::ordering::order_moves;
use crate::api::{legal_moves, make_move, undo_move};
use crate::constants::{MATE_SCORE, SCORE_INF};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::evaluate;
use crate::move_gen::is_in_check;
use crate::types::{Game, Move};

/// Find the best move for the side to move, searching `depth` plies.
///
/// Candidates are ordered captures-first and each is searched with a full
/// window; the first strictly-better score wins, so ties resolve to the
/// earliest candidate in the ordering and repeated calls on the same
/// position return the same move.
///
/// # Errors
///
/// - [`EngineError::InvalidDepth`] if `depth` is negative.
/// - [`EngineError::NoLegalMoves`] if the position is terminal; callers must
///   check [`game_state`](crate::api::game_state) first.
pub fn find_best_move(game: &mut Game, depth: i32) -> EngineResult<Move> {
    if depth < 0 {
        return Err(EngineError::InvalidDepth { depth });
    }

    let color = game.turn;
    let mut moves = legal_moves(game, color);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves { color });
    }
    order_moves(&mut moves);

    game.nodes = 0;
    game.cuts = 0;

    let mut best_move = moves[0];
    let mut best_score = -SCORE_INF;

    for mv in moves {
        make_move(game, mv);
        let score = -negamax(game, depth - 1, -SCORE_INF, SCORE_INF);
        // Matching snapshot was pushed by make_move just above.
        let _ = undo_move(game);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    debug!(
        %best_move,
        best_score,
        depth,
        nodes = game.nodes,
        cuts = game.cuts,
        "search complete"
    );
    Ok(best_move)
}

/// Score the position for the side to move, searching `depth` plies.
///
/// - `depth <= 0`: static evaluation signed to the side to move.
/// - No legal moves: mate score biased by remaining depth when in check, so
///   shallower (faster) mates score better; zero for stalemate.
/// - Otherwise: maximize over children, raising `alpha` and cutting off as
///   soon as `alpha >= beta` - the opponent already has a better alternative
///   elsewhere, so the branch cannot affect the final decision.
pub(crate) fn negamax(game: &mut Game, depth: i32, mut alpha: i32, beta: i32) -> i32 {
    game.nodes += 1;

    if depth <= 0 {
        return game.turn.sign() * evaluate(&game.board);
    }

    let color = game.turn;
    let mut moves = legal_moves(game, color);
    if moves.is_empty() {
        return if is_in_check(game, color) {
            -MATE_SCORE + (10 - depth)
        } else {
            0
        };
    }
    order_moves(&mut moves);

    let mut best = -SCORE_INF;
    for mv in moves {
        make_move(game, mv);
        let score = -negamax(game, depth - 1, -beta, -alpha);
        // Matching snapshot was pushed by make_move just above.
        let _ = undo_move(game);

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            game.cuts += 1;
            break;
        }
    }

    best
}
