//! Core domain types for tic-tac-toe.

use crate::action::{Action, GameError};
use crate::invariants::{BalancedMarks, Invariant};
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Terminal value of a finished game, from X's perspective:
/// `+1` X won, `-1` O won, `0` draw.
pub type Score = i8;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Terminal score of this outcome.
    pub fn score(&self) -> Score {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is an immutable value type: [`Board::apply`] returns a fresh
/// board and leaves its input untouched. The mover is not stored; it is
/// derived from the mark counts (X goes first, so equal counts mean X to
/// move).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given coordinates, or `None` if out of range.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|idx| self.squares[idx])
    }

    /// Checks if the square at the given coordinates is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Sets the square at a row-major index (unchecked - use
    /// [`Board::apply`] for validated transitions).
    pub(crate) fn set(&mut self, idx: usize, square: Square) {
        self.squares[idx] = square;
    }

    /// Counts the X and O marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for square in self.squares {
            match square {
                Square::Occupied(Player::X) => x_count += 1,
                Square::Occupied(Player::O) => o_count += 1,
                Square::Empty => {}
            }
        }
        (x_count, o_count)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the game is over: a winner exists or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Returns the outcome of a finished game, or `None` while the game is
    /// in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.winner() {
            Some(Outcome::Winner(winner))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Terminal score of a finished game: `+1` if X won, `-1` if O won,
    /// `0` for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotTerminal`] while the game is in progress; an
    /// unfinished board has no utility.
    pub fn utility(&self) -> Result<Score, GameError> {
        self.outcome()
            .map(|outcome| outcome.score())
            .ok_or(GameError::NotTerminal)
    }

    /// Returns the player to move, derived from the mark counts.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] on a terminal board; there is no
    /// mover once the game is over.
    pub fn to_move(&self) -> Result<Player, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        Ok(rules::next_player(self))
    }

    /// Returns all actions targeting empty squares, in row-major order.
    ///
    /// The result is duplicate-free and empty iff the board is full. Any
    /// enumeration order is semantically valid; row-major scan order is
    /// fixed here so move selection stays deterministic.
    pub fn actions(&self) -> Vec<Action> {
        (0..9)
            .map(Action::from_index)
            .filter(|&action| self.is_empty(action))
            .collect()
    }

    /// Applies an action, placing the mover's mark at its coordinates and
    /// returning the resulting board. The input board is left untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfRange`] if a coordinate is outside `0..=2`.
    /// - [`GameError::Occupied`] if the target square is not empty.
    /// - [`GameError::GameOver`] if the board is already terminal.
    #[instrument(skip(self))]
    pub fn apply(&self, action: Action) -> Result<Board, GameError> {
        let idx = action.index().ok_or(GameError::OutOfRange(action))?;
        if self.squares[idx] != Square::Empty {
            return Err(GameError::Occupied(action));
        }
        let mover = self.to_move()?;

        let mut next = self.clone();
        next.set(idx, Square::Occupied(mover));
        debug_assert!(
            BalancedMarks::holds(&next),
            "{}",
            BalancedMarks::description()
        );
        Ok(next)
    }

    /// Reconstructs a board by replaying a move sequence from the empty
    /// board. The mover is derived per step, so marks alternate by
    /// construction.
    ///
    /// # Errors
    ///
    /// Fails like [`Board::apply`] on the first illegal action.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<Board, GameError> {
        let mut board = Board::new();
        for &action in actions {
            board = board.apply(action)?;
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.squares[row * 3 + col] {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
