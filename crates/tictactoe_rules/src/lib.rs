//! Tic-tac-toe rules engine.
//!
//! A [`Game`] owns a 3x3 [`Board`] and a [`Status`]. Moves go through
//! [`Game::attempt_move`], which validates, applies and re-evaluates the
//! status in one step; [`Game::status`] reads the outcome.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Game, Status, Symbol};
//!
//! let mut game = Game::new();
//! assert!(game.attempt_move(0, 0, Symbol::X));
//! assert!(game.attempt_move(0, 1, Symbol::X));
//! assert!(game.attempt_move(0, 2, Symbol::X));
//! assert_eq!(game.status(), Status::XWon);
//!
//! // Finished games accept no further moves.
//! assert!(!game.attempt_move(1, 1, Symbol::O));
//! ```
//!
//! # Architecture
//!
//! - **Types**: marks, cells, board and status
//! - **Rules**: pure win/draw evaluation of a board
//! - **Contracts**: move preconditions and postconditions
//! - **Invariants**: properties every reachable game satisfies
//! - **Config**: optional rule variants loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod game;
mod invariants;
mod position;
pub mod rules;
mod types;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, Status, Symbol};

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - State machine
pub use game::Game;

// Crate-level exports - Rules and configuration
pub use config::{ConfigError, RulesConfig, TurnOrder};
pub use rules::{Line, LineScan, Verdict};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty, WithinBounds,
};
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant,
};
