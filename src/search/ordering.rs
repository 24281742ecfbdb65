//! Move ordering for alpha-beta pruning
//!
//! Captures first. Trying forcing moves early raises alpha sooner and makes
//! beta cutoffs fire earlier in each node; ordering is a pure heuristic and
//! never changes the final score, only the nodes visited.
//!
//! The sort is stable, so moves keep their generation order within each
//! class. Together with the strictly-greater argmax update at the root this
//! makes the search fully deterministic.

use crate::types::{Move, MoveKind};

/// Order moves captures-first, preserving generation order within each class.
pub(crate) fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| match m.kind {
        MoveKind::Capture => 0,
        MoveKind::Quiet => 1,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_captures_come_first() {
        let mut moves = vec![
            Move::new(8, 16, MoveKind::Quiet),
            Move::new(9, 18, MoveKind::Capture),
            Move::new(10, 18, MoveKind::Quiet),
            Move::new(11, 18, MoveKind::Capture),
        ];
        order_moves(&mut moves);
        assert!(moves[0].is_capture());
        assert!(moves[1].is_capture());
        assert!(!moves[2].is_capture());
        assert!(!moves[3].is_capture());
    }

    #[test]
    fn test_ordering_is_stable_within_class() {
        let mut moves = vec![
            Move::new(1, 2, MoveKind::Quiet),
            Move::new(3, 4, MoveKind::Capture),
            Move::new(5, 6, MoveKind::Quiet),
            Move::new(7, 8, MoveKind::Capture),
        ];
        order_moves(&mut moves);
        assert_eq!(moves[0].from, 3, "earlier-generated capture stays first");
        assert_eq!(moves[1].from, 7);
        assert_eq!(moves[2].from, 1, "earlier-generated quiet stays first");
        assert_eq!(moves[3].from, 5);
    }
}
