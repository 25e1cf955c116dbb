//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// The X mark.
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Contents of one square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Character used by the debug rendering.
    fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(Symbol::X) => 'X',
            Cell::Occupied(Symbol::O) => 'O',
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Occupied(symbol)
    }
}

/// Outcome state of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Status {
    /// Moves are still being accepted.
    #[default]
    #[display("UNFINISHED")]
    Unfinished,
    /// X completed a line.
    #[display("X_WON")]
    XWon,
    /// O completed a line.
    #[display("O_WON")]
    OWon,
    /// Board filled with no completed line.
    #[display("DRAW")]
    Draw,
}

impl Status {
    /// Status recorded when `symbol` completes a line.
    pub fn won_by(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Status::XWon,
            Symbol::O => Status::OWon,
        }
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Status::XWon => Some(Symbol::X),
            Status::OWon => Some(Symbol::O),
            Status::Unfinished | Status::Draw => None,
        }
    }

    /// True for `XWon`, `OWon` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != Status::Unfinished
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// Useful for evaluating positions with the functions in [`crate::rules`].
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.column()]
    }

    /// Gets the cell at raw coordinates, or `None` when they are off the board.
    pub fn cell(&self, row: i32, column: i32) -> Option<Cell> {
        Position::from_coords(row, column).map(|pos| self.get(pos))
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Empty)
            .count()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.column()] = cell;
    }
}

/// Debug rendering: three lines of `a | b | c`, `-` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, [a, b, c]) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} | {} | {}", a.glyph(), b.glyph(), c.glyph())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(board.cells().all(|c| c == Cell::Empty));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Position::MiddleRight, Cell::Occupied(Symbol::O));
        assert_eq!(board.get(Position::MiddleRight), Cell::Occupied(Symbol::O));
        assert_eq!(board.cell(1, 2), Some(Cell::Occupied(Symbol::O)));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn test_cell_off_board() {
        let board = Board::new();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, -1), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Symbol::X.into());
        board.set(Position::Center, Symbol::O.into());
        assert_eq!(board.to_string(), "X | - | -\n- | O | -\n- | - | -");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Unfinished.to_string(), "UNFINISHED");
        assert_eq!(Status::XWon.to_string(), "X_WON");
        assert_eq!(Status::OWon.to_string(), "O_WON");
        assert_eq!(Status::Draw.to_string(), "DRAW");
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(Status::won_by(Symbol::O), Status::OWon);
        assert_eq!(Status::XWon.winner(), Some(Symbol::X));
        assert_eq!(Status::Draw.winner(), None);
        assert!(!Status::Unfinished.is_terminal());
        assert!(Status::Draw.is_terminal());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }
}
