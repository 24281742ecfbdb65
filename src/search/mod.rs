//! Alpha-beta game-tree search
//!
//! Depth-limited negamax with alpha-beta pruning over the legal-move
//! generator, with captures-first move ordering. The search runs to
//! completion on the calling thread; there is no background worker, no
//! cancellation and no timeout. Pacing of the engine's reply is the
//! controller's concern.
//!
//! ## Module Organization
//!
//! - `negamax` - recursive search and the best-move driver
//! - `ordering` - captures-first move ordering

mod negamax;
mod ordering;

pub use negamax::find_best_move;
