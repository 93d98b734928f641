//! Tic-tac-toe rules engine with a rule-driven computer opponent.
//!
//! This crate is the pure core of the game: the board and per-player
//! ledgers, win-line scanning, the computer's win/block/positional
//! move policy, and the game state that ties them together. The
//! opponent plays a fixed rulebook - complete an own line, deny the
//! opponent theirs, otherwise take the best-ranked open cell - so
//! every in-game decision is deterministic. Randomness enters only
//! through the injected first-mover coin flip, and all I/O belongs to
//! client crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod engine;
mod error;
mod invariants;
mod ledger;
mod lines;
mod state;

pub use board::{Board, Square, Token};
pub use cell::{Cell, Tier};
pub use engine::{decide, Decision, Tactic};
pub use error::Error;
pub use invariants::{LedgersMirrorBoard, StatusCurrent, TokensDistinct};
pub use ledger::Ledger;
pub use lines::{completing_cell, has_win, WIN_LINES};
pub use state::{weighted_first_mover, GameState, GameStatus, Player, Seat};
