//! Minimax search with alpha-beta pruning.
//!
//! Tic-tac-toe is small enough to search to the bottom: every line of
//! play ends at a terminal board, scored by [`Board::utility`] from X's
//! perspective. X maximizes that score and O minimizes it. Alpha-beta
//! pruning skips subtrees that provably cannot affect the chosen value;
//! it never changes the value itself, only the set of branches visited.

use crate::action::{Action, GameError};
use crate::types::{Board, Player, Score};
use tracing::{debug, instrument};

/// Strictly above any terminal utility.
const INF: Score = 2;

/// Search result: the chosen action, its proven value, and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Optimal action for the player to move.
    pub action: Action,
    /// Game value of the board under optimal play from both sides.
    pub score: Score,
    /// Boards visited below the root.
    pub nodes: u64,
}

/// Returns the optimal action for the player to move.
///
/// Ties between equally-valued actions go to the first one in row-major
/// enumeration order.
///
/// # Errors
///
/// Returns [`GameError::GameOver`] on a terminal board; there is no move
/// to recommend.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{minimax, Action, Board};
///
/// // X completes the top row rather than anything else.
/// let board = Board::replay(&[
///     Action::new(0, 0),
///     Action::new(1, 0),
///     Action::new(0, 1),
///     Action::new(1, 1),
/// ])
/// .unwrap();
/// assert_eq!(minimax(&board), Ok(Action::new(0, 2)));
/// ```
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Result<Action, GameError> {
    search(board).map(|result| result.action)
}

/// Searches the board and returns the chosen action together with its
/// value and the number of boards visited.
///
/// The root evaluates every legal action with the full (−∞, +∞) window.
/// The selected action is replaced only on a strict improvement, so the
/// first optimal action in row-major order wins ties; the root bound is
/// tightened after each improvement, which prunes inside later subtrees
/// but cannot displace a strictly better action.
///
/// # Errors
///
/// Returns [`GameError::GameOver`] on a terminal board.
#[instrument(skip(board))]
pub fn search(board: &Board) -> Result<SearchResult, GameError> {
    let mover = board.to_move()?;

    let mut nodes = 0;
    let mut alpha = -INF;
    let mut beta = INF;
    let mut best: Option<(Action, Score)> = None;

    for action in board.actions() {
        let next = board.apply(action)?;
        let score = match mover {
            Player::X => min_value(&next, alpha, beta, &mut nodes),
            Player::O => max_value(&next, alpha, beta, &mut nodes),
        };

        let improved = match best {
            None => true,
            Some((_, best_score)) => match mover {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improved {
            best = Some((action, score));
            match mover {
                Player::X => alpha = alpha.max(score),
                Player::O => beta = beta.min(score),
            }
        }
    }

    let (action, score) = best.expect("non-terminal board has at least one action");
    debug!(%action, score, nodes, "search complete");
    Ok(SearchResult {
        action,
        score,
        nodes,
    })
}

/// Best score the maximizer can force from this board.
///
/// Stops exploring once `alpha >= beta`: the minimizer above already has
/// a better option, so the remaining siblings cannot matter.
fn max_value(board: &Board, mut alpha: Score, beta: Score, nodes: &mut u64) -> Score {
    *nodes += 1;
    if let Some(outcome) = board.outcome() {
        return outcome.score();
    }

    let mut value = -INF;
    for action in board.actions() {
        let next = board
            .apply(action)
            .expect("actions() only yields empty cells");
        value = value.max(min_value(&next, alpha, beta, nodes));
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    value
}

/// Best score the minimizer can force from this board.
fn min_value(board: &Board, alpha: Score, mut beta: Score, nodes: &mut u64) -> Score {
    *nodes += 1;
    if let Some(outcome) = board.outcome() {
        return outcome.score();
    }

    let mut value = INF;
    for action in board.actions() {
        let next = board
            .apply(action)
            .expect("actions() only yields empty cells");
        value = value.min(max_value(&next, alpha, beta, nodes));
        beta = beta.min(value);
        if beta <= alpha {
            break;
        }
    }
    value
}
