//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines as row-major indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player has three identical marks on a
/// line, `None` otherwise. Lines are scanned rows first, then columns,
/// then diagonals; under alternating play at most one player can have a
/// completed line, so the scan order is unobservable.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
