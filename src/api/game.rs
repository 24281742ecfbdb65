//! Game lifecycle management
//!
//! Functions for creating, resetting and loading games.

use tracing::debug;

use crate::board::parse_position;
use crate::error::EngineResult;
use crate::types::Game;

/// Create a new game in the standard starting position, White to move.
pub fn new_game() -> Game {
    Game::default()
}

/// Reset the game to the starting position and clear the move history.
pub fn reset_game(game: &mut Game) {
    *game = Game::default();
}

/// Load a position from placement notation and set the side to move.
///
/// Clears the board, the history and the search telemetry. On a parse error
/// the game is left untouched: the previous position stays in place rather
/// than a half-parsed board.
///
/// # Arguments
///
/// * `game` - The game state to overwrite
/// * `input` - Placement notation (eight `/`-separated ranks) followed by a
///   `w`/`b` side token; trailing full-FEN fields are ignored
///
/// # Errors
///
/// Returns [`EngineError::MalformedPosition`](crate::error::EngineError) for
/// any input that does not describe a full 8x8 board with a valid side token.
pub fn load_position(game: &mut Game, input: &str) -> EngineResult<()> {
    let (board, turn) = parse_position(input)?;

    game.board = board;
    game.turn = turn;
    game.history.clear();
    game.nodes = 0;
    game.cuts = 0;

    debug!(?turn, "position loaded");
    Ok(())
}
