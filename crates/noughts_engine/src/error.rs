//! Error types for game operations.

use crate::Cell;

/// Error raised when validating or applying a game operation.
///
/// Every failure is reported to the caller as an explicit result;
/// nothing is retried or swallowed inside the crate. Re-prompting on
/// the recoverable kinds is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// The number does not name one of the nine cells.
    #[display("{} is not a cell on the board (use 1-9)", _0)]
    InvalidCell(u8),

    /// The cell is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),

    /// The token is outside the x/o alphabet, or both players picked
    /// the same one.
    #[display("'{}' is not a valid token choice", _0)]
    InvalidTokenChoice(char),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for Error {}
