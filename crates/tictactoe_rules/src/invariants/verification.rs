//! Formal verification of the move operation using the Kani model checker.
//!
//! These proof harnesses verify properties for all inputs (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{Game, GameInvariants, InvariantSet, Status, Symbol};

    fn any_symbol() -> Symbol {
        if kani::any() { Symbol::X } else { Symbol::O }
    }

    /// Off-board coordinates are rejected without touching the game.
    #[kani::proof]
    fn verify_out_of_bounds_rejected() {
        let row: i32 = kani::any();
        let column: i32 = kani::any();
        kani::assume(!(0..=2).contains(&row) || !(0..=2).contains(&column));

        let mut game = Game::new();
        let before = game.clone();
        assert!(!game.attempt_move(row, column, any_symbol()));
        assert_eq!(game, before);
    }

    /// Any two accepted moves leave every invariant intact.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_two_moves_keep_invariants() {
        let mut game = Game::new();
        for _ in 0..2 {
            let row: i32 = kani::any();
            let column: i32 = kani::any();
            game.attempt_move(row, column, any_symbol());
        }
        assert_eq!(game.status(), Status::Unfinished);
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}
