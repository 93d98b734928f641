//! Win lines and completion scanning.

use crate::{Board, Cell, Ledger};

/// The 8 winning triples: rows, then columns, then diagonals.
///
/// The scan order is fixed, and completion checks report the first
/// match, so tie-breaks between simultaneously completable lines are
/// deterministic.
pub const WIN_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks whether the ledger owns any full line.
pub fn has_win(ledger: Ledger) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|cell| ledger.owns(*cell)))
}

/// Finds the first line the ledger is one cell short of completing
/// and returns that open cell.
///
/// Lines are scanned in `WIN_LINES` order; the first qualifying third
/// cell wins the tie-break. A line whose third cell is already marked
/// on the board cannot be completed and is skipped.
pub fn completing_cell(ledger: Ledger, board: &Board) -> Option<Cell> {
    for line in WIN_LINES {
        let owned = line.iter().filter(|cell| ledger.owns(**cell)).count();
        if owned != 2 {
            continue;
        }
        if let Some(cell) = line.into_iter().find(|cell| !ledger.owns(*cell))
            && board.is_available(cell)
        {
            return Some(cell);
        }
    }
    None
}
