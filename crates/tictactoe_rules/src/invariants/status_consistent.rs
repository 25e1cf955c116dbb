//! Status consistency invariant: the recorded status matches the board.

use super::super::Game;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: status and winning line equal a fresh evaluation of the board
/// under the game's line-scan mode.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let verdict = evaluate(game.board(), *game.rules().line_scan());
        verdict.status == game.status() && verdict.line == game.winning_line()
    }

    fn description() -> &'static str {
        "Status matches the line scan and empty count of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Status, Symbol};

    #[test]
    fn test_won_game_holds() {
        let mut game = Game::new();
        for row in 0..3 {
            assert!(game.attempt_move(row, 1, Symbol::O));
        }
        assert_eq!(game.status(), Status::OWon);
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = Game::new();
        for col in 0..3 {
            assert!(game.attempt_move(2, col, Symbol::X));
        }
        game.status = Status::Unfinished;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
