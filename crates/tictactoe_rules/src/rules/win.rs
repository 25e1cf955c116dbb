//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position, Symbol};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A row, column or diagonal.
///
/// Variants are declared in scan priority order: rows top to bottom, columns
/// left to right, then the main diagonal and the anti-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Top row.
    Row0,
    /// Middle row.
    Row1,
    /// Bottom row.
    Row2,
    /// Left column.
    Column0,
    /// Middle column.
    Column1,
    /// Right column.
    Column2,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    /// The three squares of this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::Row0 => [TopLeft, TopCenter, TopRight],
            Line::Row1 => [MiddleLeft, Center, MiddleRight],
            Line::Row2 => [BottomLeft, BottomCenter, BottomRight],
            Line::Column0 => [TopLeft, MiddleLeft, BottomLeft],
            Line::Column1 => [TopCenter, Center, BottomCenter],
            Line::Column2 => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [BottomLeft, Center, TopRight],
        }
    }

    /// The line's cells, or `None` unless all three are equal.
    fn uniform(self, board: &Board) -> Option<Cell> {
        let [a, b, c] = self.positions().map(|pos| board.get(pos));
        (a == b && b == c).then_some(a)
    }
}

/// How the line scan treats a line of three empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineScan {
    /// Skip empty lines; stop at the first line filled by one mark.
    #[default]
    FirstComplete,
    /// Stop at the first line whose cells are equal, empty ones included.
    ///
    /// An empty line found first ends the scan with no winner, so a later
    /// completed line goes unnoticed until the empty line gets a mark. This
    /// is how the original engine scanned.
    FirstUniform,
}

/// Scans lines in priority order and returns the deciding line and its mark.
#[instrument(skip(board))]
pub fn scan_lines(board: &Board, scan: LineScan) -> Option<(Line, Symbol)> {
    for line in Line::iter() {
        let Some(cell) = line.uniform(board) else {
            continue;
        };
        match (cell.symbol(), scan) {
            (Some(symbol), _) => return Some((line, symbol)),
            (None, LineScan::FirstComplete) => continue,
            (None, LineScan::FirstUniform) => return None,
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if a line is filled by one mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    scan_lines(board, LineScan::FirstComplete).map(|(_, symbol)| symbol)
}
