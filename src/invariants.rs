//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every board
//! reachable by legal play. They are checked in debug builds after each
//! transition and are testable independently.

use crate::types::Board;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts stay balanced under alternating play.
///
/// X moves first, so on any reachable board the X count equals the O
/// count or exceeds it by exactly one.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let (x_count, o_count) = board.mark_counts();

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count, or exceeds it by exactly one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::types::{Player, Square};

    #[test]
    fn test_holds_for_empty_board() {
        assert!(BalancedMarks::holds(&Board::new()));
    }

    #[test]
    fn test_holds_along_legal_play() {
        let moves = [
            Action::new(1, 1),
            Action::new(0, 0),
            Action::new(0, 2),
            Action::new(2, 0),
            Action::new(2, 2),
        ];

        let mut board = Board::new();
        for action in moves {
            board = board.apply(action).expect("legal move");
            assert!(BalancedMarks::holds(&board));
        }
    }

    #[test]
    fn test_detects_unbalanced_board() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(1, Square::Occupied(Player::X));
        assert!(!BalancedMarks::holds(&board));

        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::O));
        assert!(!BalancedMarks::holds(&board));
    }
}
