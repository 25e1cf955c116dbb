//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The state machine in [`crate::Game`]
//! calls [`evaluate`] after every accepted move; the pieces are public so
//! positions can be judged without playing them out.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, LineScan, check_winner, scan_lines};

use super::{Board, Status};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of judging a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Status the board is in.
    pub status: Status,
    /// The line that decided a win, if any.
    pub line: Option<Line>,
}

/// Computes the status of a board.
///
/// The line scan runs first; only when it yields no winner does the empty
/// count decide between `Draw` and `Unfinished`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, scan: LineScan) -> Verdict {
    if let Some((line, symbol)) = scan_lines(board, scan) {
        return Verdict {
            status: Status::won_by(symbol),
            line: Some(line),
        };
    }

    let status = if is_full(board) {
        Status::Draw
    } else {
        Status::Unfinished
    };
    Verdict { status, line: None }
}
