//! Board cells and their positional tiers.

use serde::{Deserialize, Serialize};

/// A cell on the 3x3 board, numbered 1-9 left to right, top to bottom.
///
/// Cells are fixed identities: play changes what occupies a cell,
/// never the set of cells. Anything arriving as a raw number is
/// converted here, at the boundary, so the rest of the crate only
/// ever sees a valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in board order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Board number of this cell (1-9).
    pub fn index(self) -> u8 {
        match self {
            Cell::TopLeft => 1,
            Cell::TopCenter => 2,
            Cell::TopRight => 3,
            Cell::MiddleLeft => 4,
            Cell::Center => 5,
            Cell::MiddleRight => 6,
            Cell::BottomLeft => 7,
            Cell::BottomCenter => 8,
            Cell::BottomRight => 9,
        }
    }

    /// Row-major array offset (0-8).
    pub fn offset(self) -> usize {
        usize::from(self.index() - 1)
    }

    /// Looks up a cell by its board number (1-9).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Cell::TopLeft),
            2 => Some(Cell::TopCenter),
            3 => Some(Cell::TopRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::BottomLeft),
            8 => Some(Cell::BottomCenter),
            9 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Positional tier of this cell.
    pub fn tier(self) -> Tier {
        match self {
            Cell::Center => Tier::Center,
            Cell::TopLeft | Cell::TopRight | Cell::BottomLeft | Cell::BottomRight => Tier::Corner,
            Cell::TopCenter | Cell::MiddleLeft | Cell::MiddleRight | Cell::BottomCenter => {
                Tier::Edge
            }
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Positional class of a cell.
///
/// Tiers partition the board into one center, four corners, and four
/// edges. They rank fallback desirability only; any open cell is a
/// legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The middle cell.
    Center,
    /// The four corner cells.
    Corner,
    /// The four mid-side cells.
    Edge,
}

impl Tier {
    /// Tiers in fallback preference order.
    pub const PRIORITY: [Tier; 3] = [Tier::Center, Tier::Corner, Tier::Edge];

    /// Cells of this tier in canonical order, the fallback tie-break.
    pub fn cells(self) -> &'static [Cell] {
        match self {
            Tier::Center => &[Cell::Center],
            Tier::Corner => &[
                Cell::TopLeft,
                Cell::TopRight,
                Cell::BottomLeft,
                Cell::BottomRight,
            ],
            Tier::Edge => &[
                Cell::TopCenter,
                Cell::MiddleLeft,
                Cell::MiddleRight,
                Cell::BottomCenter,
            ],
        }
    }
}
