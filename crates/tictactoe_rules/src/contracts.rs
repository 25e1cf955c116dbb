//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal status.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_finished() {
            Err(MoveError::GameOver(game.status()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: row and column are both in 0..=2.
pub struct WithinBounds;

impl WithinBounds {
    /// Resolves the move's target square.
    pub fn check(mov: &Move) -> Result<Position, MoveError> {
        mov.position().ok_or(MoveError::OutOfBounds {
            row: mov.row,
            column: mov.column,
        })
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if `pos` holds a mark.
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: the mark is the one to move, when turns are enforced.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Always passes under unchecked turn order.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        match game.to_move() {
            Some(expected) if expected != mov.mark => Err(MoveError::OutOfTurn(mov.mark)),
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: game not over, target on the
/// board, target empty, then turn order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let pos = WithinBounds::check(mov)?;
        SquareIsEmpty::check(pos, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - History grew by exactly one move
/// - Every game invariant holds
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history went from {} to {} moves",
                before.history().len(),
                after.history().len()
            )));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
pub(crate) fn assert_postconditions(before: &Game, after: &Game) {
    let result = MoveContract::post(before, after);
    if let Err(e) = &result {
        warn!(error = %e, "Move postcondition violated");
    }
    debug_assert!(result.is_ok(), "{:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, RulesConfig, Status, Symbol};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Move::new(1, 1, Symbol::X)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        assert!(game.attempt_move(1, 1, Symbol::X));
        assert_eq!(
            MoveContract::pre(&game, &Move::new(1, 1, Symbol::O)),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = Game::new();
        assert_eq!(
            LegalMove::check(&Move::new(0, 3, Symbol::X), &game),
            Err(MoveError::OutOfBounds { row: 0, column: 3 })
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut game = Game::new();
        for col in 0..3 {
            assert!(game.attempt_move(0, col, Symbol::X));
        }
        // Off-board and occupied, but the finished game is reported.
        assert_eq!(
            LegalMove::check(&Move::new(0, 0, Symbol::O), &game),
            Err(MoveError::GameOver(Status::XWon))
        );
        assert_eq!(
            LegalMove::check(&Move::new(7, 7, Symbol::O), &game),
            Err(MoveError::GameOver(Status::XWon))
        );
    }

    #[test]
    fn test_bounds_checked_before_turn() {
        let game = Game::with_rules(RulesConfig::alternating(Symbol::X));
        assert_eq!(
            LegalMove::check(&Move::new(5, 0, Symbol::O), &game),
            Err(MoveError::OutOfBounds { row: 5, column: 0 })
        );
        assert_eq!(
            LegalMove::check(&Move::new(0, 0, Symbol::O), &game),
            Err(MoveError::OutOfTurn(Symbol::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        assert!(after.attempt_move(2, 1, Symbol::O));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        assert!(after.attempt_move(1, 1, Symbol::X));

        after.board.set(Position::TopLeft, Cell::Occupied(Symbol::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let before = Game::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }
}
