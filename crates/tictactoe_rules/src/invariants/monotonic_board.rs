//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Cell, Game};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let Some(pos) = mov.position() else {
                return false;
            };

            // Square must be empty before placing
            if !reconstructed.is_empty(pos) {
                return false;
            }

            reconstructed.set(pos, Cell::Occupied(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Symbol};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = Game::new();
        assert!(game.attempt_move(0, 0, Symbol::X));
        assert!(game.attempt_move(1, 1, Symbol::O));
        assert!(game.attempt_move(2, 0, Symbol::X));
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::new();
        assert!(game.attempt_move(1, 1, Symbol::X));

        game.board.set(Position::Center, Cell::Occupied(Symbol::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut game = Game::new();
        assert!(game.attempt_move(1, 1, Symbol::X));

        game.history.push(Move::new(1, 1, Symbol::X));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
