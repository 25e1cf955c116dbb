//! Shared helpers for integration tests.

#![allow(dead_code)]

use tictactoe_rules::{Game, Symbol};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Plays `(row, column, mark)` triples, asserting each is accepted.
pub fn play(game: &mut Game, moves: &[(i32, i32, Symbol)]) {
    for &(row, column, mark) in moves {
        assert!(
            game.attempt_move(row, column, mark),
            "move ({row}, {column}, {mark}) rejected\n{}",
            game.board()
        );
    }
}
