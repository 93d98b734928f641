//! Per-player record of occupied cells.

use crate::Cell;
use serde::{Deserialize, Serialize};

/// The cells one player occupies, keyed by cell.
///
/// A ledger mirrors the board for a single player's token, so win and
/// block checks read one player's cells directly instead of rescanning
/// the grid. Whoever mutates the board must keep the owning player's
/// ledger in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// One flag per cell, row-major.
    marks: [bool; 9],
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cell as occupied. Recording twice is a no-op.
    pub fn record(&mut self, cell: Cell) {
        self.marks[cell.offset()] = true;
    }

    /// Checks whether this player occupies a cell.
    pub fn owns(self, cell: Cell) -> bool {
        self.marks[cell.offset()]
    }

    /// Cells this player occupies, in board order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        Cell::ALL.into_iter().filter(move |cell| self.owns(*cell))
    }

    /// Number of cells recorded.
    pub fn count(self) -> usize {
        self.marks.iter().filter(|mark| **mark).count()
    }
}
