//! Computer move selection: win, block, or best open cell.

use crate::{lines, Board, Cell, Ledger, Tier};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that chose a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    /// Completes one of the computer's own lines.
    Winning,
    /// Takes the cell the opponent needs.
    Blocking,
    /// Best-ranked open cell by tier.
    Positional,
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tactic::Winning => "winning",
            Tactic::Blocking => "blocking",
            Tactic::Positional => "positional",
        };
        write!(f, "{name}")
    }
}

/// A selected move: the cell and the tactic that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen cell.
    pub cell: Cell,
    /// The rule that fired.
    pub tactic: Tactic,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.cell, self.tactic)
    }
}

/// Selects the computer's move.
///
/// The rules fire in fixed order: complete an own line, else deny the
/// opponent theirs, else take the best open cell - center first, then
/// corners, then edges, each tier in canonical order. Returns `None`
/// only when the board has no open cell.
#[instrument(skip(board, computer, human))]
pub fn decide(board: &Board, computer: Ledger, human: Ledger) -> Option<Decision> {
    if let Some(cell) = lines::completing_cell(computer, board) {
        debug!(cell = %cell, "winning cell is open");
        return Some(Decision {
            cell,
            tactic: Tactic::Winning,
        });
    }
    if let Some(cell) = lines::completing_cell(human, board) {
        debug!(cell = %cell, "blocking the opponent");
        return Some(Decision {
            cell,
            tactic: Tactic::Blocking,
        });
    }
    let cell = preferred_open_cell(board)?;
    debug!(cell = %cell, tier = ?cell.tier(), "positional pick");
    Some(Decision {
        cell,
        tactic: Tactic::Positional,
    })
}

/// First open cell by tier priority, canonical order within a tier.
fn preferred_open_cell(board: &Board) -> Option<Cell> {
    Tier::PRIORITY
        .into_iter()
        .find_map(|tier| board.available_in(tier).into_iter().next())
}
