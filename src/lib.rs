//! # pocket_chess - Embeddable Chess Engine
//!
//! A small adversarial-game core for game UIs: board representation, legal
//! move generation, check/checkmate/stalemate detection and a depth-limited
//! negamax search with alpha-beta pruning.
//!
//! ## Rule Subset
//!
//! Pawn double-step, auto-queen promotion, standard piece movement and
//! check/checkmate/stalemate classification. No castling, no en-passant and
//! no draw detection beyond stalemate; the `Move` type stays a plain
//! from/to pair because nothing outside the board snapshot needs undoing.
//!
//! ## Architecture
//!
//! Two components, consumed bottom-up by a game controller:
//!
//! - **Board/rules engine** ([`api`], [`move_gen`], [`board`]): owns the
//!   64-slot board, turn tracking, pseudo-legal and legal move generation,
//!   attack detection and make/undo with a full-snapshot history stack.
//! - **Search engine** ([`search`], [`evaluation`]): drives make/undo cycles
//!   through the rules engine to explore the game tree and picks a move by
//!   negamax with alpha-beta pruning over a material + piece-square
//!   evaluation.
//!
//! ## Usage
//!
//! ```rust
//! use pocket_chess::api::{game_state, legal_moves, make_move, new_game, reply};
//! use pocket_chess::types::{Color, Difficulty, GameState};
//!
//! let mut game = new_game();
//!
//! // Human plays the first legal move the UI confirmed.
//! let mv = legal_moves(&mut game, Color::White)[0];
//! make_move(&mut game, mv);
//!
//! // Engine replies unless the game just ended.
//! if game_state(&mut game, Color::Black) == GameState::InProgress {
//!     let engine_move = reply(&mut game, Difficulty::Medium).unwrap();
//!     make_move(&mut game, engine_move);
//! }
//! ```
//!
//! The whole engine is single-threaded and synchronous: a search blocks its
//! caller until the move is chosen, and the board it explores is restored
//! exactly before it returns.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use types::{
    Board, Color, Difficulty, Game, GameState, HistoryEntry, Move, MoveKind, Piece, PieceKind,
    Square,
};
