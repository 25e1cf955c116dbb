//! The board state machine.

use super::action::{Move, MoveError};
use super::config::RulesConfig;
use super::contracts::{LegalMove, assert_postconditions};
use super::position::Position;
use super::rules::{Line, evaluate};
use super::types::{Board, Cell, Status, Symbol};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

/// A tic-tac-toe game: the board, its status and the moves that built it.
///
/// A game is mutated only through [`Game::attempt_move`] / [`Game::try_move`];
/// everything else is read-only access. It holds no locks, so sharing one
/// between threads needs external synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) status: Status,
    pub(crate) winning_line: Option<Line>,
    pub(crate) history: Vec<Move>,
    pub(crate) rules: RulesConfig,
}

impl Game {
    /// Creates a new game under the default (permissive) rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game under the given rules.
    #[instrument]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Plays `moves` in order on a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is rejected.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(rules: RulesConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_rules(rules);
        for mov in moves {
            game.try_move(*mov)?;
        }
        Ok(game)
    }

    /// Places `mark` at (`row`, `column`) if the move is legal.
    ///
    /// Returns `true` when the move was applied. On `false` nothing changed:
    /// the game was already over, the coordinates were off the board, or the
    /// square was taken.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: i32, column: i32, mark: Symbol) -> bool {
        self.try_move(Move::new(row, column, mark)).is_ok()
    }

    /// Applies a move and returns the resulting status.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition; the game is left unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn try_move(&mut self, mov: Move) -> Result<Status, MoveError> {
        let pos = LegalMove::check(&mov, self).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let before = cfg!(debug_assertions).then(|| self.clone());
        self.apply(pos, mov);
        if let Some(before) = before {
            assert_postconditions(&before, self);
        }

        Ok(self.status)
    }

    fn apply(&mut self, pos: Position, mov: Move) {
        self.board.set(pos, Cell::Occupied(mov.mark));
        self.history.push(mov);

        let verdict = evaluate(&self.board, *self.rules.line_scan());
        self.status = verdict.status;
        self.winning_line = verdict.line;

        trace!(board = %self.board, "Move applied");
        if self.status.is_terminal() {
            info!(status = %self.status, line = ?self.winning_line, moves = self.history.len(), "Game finished");
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the status is `XWon`, `OWon` or `Draw`.
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the rules this game is played under.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// The mark that must move next, or `None` when any mark may move.
    pub fn to_move(&self) -> Option<Symbol> {
        let previous = self.history.last().map(|mov| mov.mark);
        self.rules.expected_mark(previous)
    }

    /// Squares still open for a move; empty once the game is over.
    pub fn open_squares(&self) -> Vec<Position> {
        if self.is_finished() {
            Vec::new()
        } else {
            Position::empty_squares(&self.board)
        }
    }
}
