//! End-to-end tests for the search engine.

use tictactoe_engine::{Action, Board, minimax, search};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Plays minimax against itself until the game ends.
fn play_out(mut board: Board) -> Board {
    while !board.is_terminal() {
        let action = minimax(&board).expect("non-terminal board");
        board = board.apply(action).expect("engine picked a legal move");
    }
    board
}

#[test]
fn test_self_play_always_draws() {
    init_tracing();

    let board = play_out(Board::new());

    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), Ok(0));
}

#[test]
fn test_reported_score_matches_played_out_value() {
    init_tracing();

    // X can force a win here; following the engine's own moves from both
    // sides must realize exactly the value it reported.
    let board = Board::replay(&[
        Action::new(0, 0),
        Action::new(1, 0),
        Action::new(0, 1),
        Action::new(1, 1),
    ])
    .unwrap();

    let result = search(&board).expect("non-terminal board");
    assert_eq!(result.score, 1);

    let finished = play_out(board);
    assert_eq!(finished.utility(), Ok(result.score));
}

#[test]
fn test_corner_opening_is_answered_in_the_center() {
    init_tracing();

    // Every reply to a corner opening except the center loses.
    let board = Board::new().apply(Action::new(0, 0)).unwrap();

    let result = search(&board).expect("non-terminal board");
    assert_eq!(result.action, Action::new(1, 1));
    assert_eq!(result.score, 0);
}

#[test]
fn test_engine_blocks_an_immediate_threat() {
    init_tracing();

    // X threatens the top row; O's only non-losing reply is the block.
    let board = Board::replay(&[
        Action::new(0, 0), // X
        Action::new(1, 1), // O
        Action::new(0, 1), // X
    ])
    .unwrap();

    let action = minimax(&board).expect("non-terminal board");
    assert_eq!(action, Action::new(0, 2));
}
