//! Pure tic-tac-toe game logic with an exhaustive adversarial search engine.
//!
//! The board is an immutable value type: applying an action produces a
//! fresh [`Board`] and never mutates its input. The mover is derived from
//! the mark counts rather than stored, so every reachable board is
//! self-describing. [`minimax`] searches the full game tree with
//! alpha-beta pruning and returns the optimal action for the player to
//! move.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{minimax, Board};
//!
//! # fn main() -> Result<(), tictactoe_engine::GameError> {
//! let mut board = Board::new();
//! while !board.is_terminal() {
//!     let action = minimax(&board)?;
//!     board = board.apply(action)?;
//! }
//! // Optimal play from both sides always draws.
//! assert!(board.winner().is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Actions and errors
pub use action::{Action, GameError};

// Crate-level exports - Invariants
pub use invariants::{BalancedMarks, Invariant};

// Crate-level exports - Rules
pub use rules::{check_winner, is_full, next_player};

// Crate-level exports - Search engine
pub use search::{SearchResult, minimax, search};

// Crate-level exports - Domain types
pub use types::{Board, Outcome, Player, Score, Square};
