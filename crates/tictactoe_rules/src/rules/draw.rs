//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;

/// Checks if the board is full (no empty squares).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
