//! History consistency invariant: history length matches occupied squares.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .cells()
            .filter(|cell| *cell != Cell::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Symbol};

    #[test]
    fn test_single_move_holds() {
        let mut game = Game::new();
        assert!(game.attempt_move(2, 2, Symbol::O));
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejected_moves_leave_no_history() {
        let mut game = Game::new();
        assert!(game.attempt_move(0, 0, Symbol::X));
        assert!(!game.attempt_move(0, 0, Symbol::O));
        assert!(!game.attempt_move(3, 3, Symbol::O));
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut game = Game::new();
        assert!(game.attempt_move(1, 1, Symbol::X));

        game.board.set(Position::TopLeft, Cell::Occupied(Symbol::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
