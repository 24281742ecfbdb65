//! Move execution, undo and legality filtering
//!
//! [`make_move`] and [`undo_move`] are the single make/undo pair shared by
//! real gameplay and the search. A full board+turn snapshot is pushed before
//! every applied move and restored verbatim on undo, so N makes followed by
//! N undos always return the game to its exact prior state. Everything the
//! search does rests on that invariant.

use crate::move_gen::{find_king, generate_pseudo_moves, is_square_attacked};
use crate::error::{EngineError, EngineResult};
use crate::types::{Color, Game, HistoryEntry, Move, Piece, PieceKind, Square};

/// Apply a move: push a snapshot, move the piece, promote, flip the turn.
///
/// Captures happen implicitly by overwriting the destination slot. A pawn
/// landing on row 0 or row 7 is replaced by a queen of its color; the move
/// itself carries no promotion tag, the board decides at apply time.
///
/// The move is not validated here. Callers pass moves produced by
/// [`legal_moves`] (or [`generate_pseudo_moves`] during search filtering);
/// applying an arbitrary square pair is not meaningful. A move from an empty
/// square still snapshots and flips the turn, and undoes cleanly.
///
/// # Returns
///
/// The snapshot that was pushed onto the history. Callers may ignore it;
/// [`undo_move`] does not need it.
pub fn make_move(game: &mut Game, mv: Move) -> HistoryEntry {
    let snapshot = HistoryEntry {
        board: game.board,
        turn: game.turn,
    };
    game.history.push(snapshot);

    if let Some(piece) = game.board[mv.from as usize].take() {
        let promoted = piece.kind == PieceKind::Pawn && (mv.to < 8 || mv.to >= 56);
        game.board[mv.to as usize] = if promoted {
            Some(Piece::new(PieceKind::Queen, piece.color))
        } else {
            Some(piece)
        };
    }

    game.turn = game.turn.opponent();
    snapshot
}

/// Undo the most recent move by restoring the popped snapshot.
///
/// # Errors
///
/// Returns [`EngineError::EmptyHistory`] when there is no applied move left
/// to undo.
pub fn undo_move(game: &mut Game) -> EngineResult<()> {
    let entry = game.history.pop().ok_or(EngineError::EmptyHistory)?;
    game.board = entry.board;
    game.turn = entry.turn;
    Ok(())
}

/// All legal moves for `color`.
///
/// Filters [`generate_pseudo_moves`] by king safety: each candidate is
/// applied, the mover's king located and tested for attack, and the move
/// undone before the next candidate. A move survives iff the king is not
/// attacked afterward.
pub fn legal_moves(game: &mut Game, color: Color) -> Vec<Move> {
    let pseudo = generate_pseudo_moves(game, color);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        make_move(game, mv);
        let safe = match find_king(game, color) {
            Some(king_sq) => !is_square_attacked(game, king_sq, color),
            None => false,
        };
        // Matching snapshot was pushed by make_move just above.
        let _ = undo_move(game);

        if safe {
            legal.push(mv);
        }
    }

    legal
}

/// Look up the legal move from `from` to `to`, if there is one.
///
/// This is the controller's click-confirm query: the UI knows two squares
/// and needs the tagged `Move` to apply.
pub fn find_legal_move(game: &mut Game, from: Square, to: Square) -> Option<Move> {
    let color = game.turn;
    legal_moves(game, color)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
}
