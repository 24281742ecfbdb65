//! Public API for the chess engine
//!
//! High-level functions the game controller drives: lifecycle, move
//! execution, state queries and the AI reply.
//!
//! ## Module Organization
//!
//! - `game` - lifecycle (new_game, reset_game, load_position)
//! - `moves` - execution and legality (make_move, undo_move, legal_moves,
//!   find_legal_move)
//! - `state` - queries and AI (game_state, board_snapshot, reply)

mod game;
mod moves;
mod state;

pub use game::{load_position, new_game, reset_game};
pub use moves::{find_legal_move, legal_moves, make_move, undo_move};
pub use state::{board_snapshot, game_state, reply};
