//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the caller's raw
//! coordinates, so an off-board move is still a representable value that
//! validation can reject.

use super::position::Position;
use super::types::{Status, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed at (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row.
    pub row: i32,
    /// Target column.
    pub column: i32,
    /// Mark being placed.
    pub mark: Symbol,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(row: i32, column: i32, mark: Symbol) -> Self {
        Self { row, column, mark }
    }

    /// Creates a move targeting a named square.
    pub fn at(position: Position, mark: Symbol) -> Self {
        Self::new(position.row() as i32, position.column() as i32, mark)
    }

    /// The target square, if the coordinates are on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.column)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.row, self.column)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already reached a terminal status.
    #[display("Game is already over ({})", _0)]
    GameOver(Status),

    /// Row or column outside 0..=2.
    #[display("Position ({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        column: i32,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Alternation is enforced and this mark is not the one to move.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Symbol),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
