//! Consistency checks between board, ledgers, and status.

use crate::{Cell, GameState, Seat, Square};
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: every marked square appears in exactly its owner's
/// ledger, and every ledger entry is marked with that owner's token.
pub struct LedgersMirrorBoard;

impl LedgersMirrorBoard {
    /// Checks the mirror in both directions: each cell a ledger lists
    /// carries its owner's token, and each marked square is listed by
    /// the owner's ledger.
    pub fn holds(state: &GameState) -> bool {
        for seat in [Seat::Human, Seat::Computer] {
            let player = state.player(seat);
            for cell in player.ledger().cells() {
                if state.board().square(cell) != Square::Marked(player.token()) {
                    warn!(seat = %seat, cell = %cell, "ledger lists a cell the board does not give it");
                    return false;
                }
            }
        }
        for cell in Cell::iter() {
            if let Square::Marked(token) = state.board().square(cell) {
                let owner = if token == state.player(Seat::Human).token() {
                    Seat::Human
                } else {
                    Seat::Computer
                };
                if !state.player(owner).ledger().owns(cell) {
                    warn!(cell = %cell, "marked square missing from the owner's ledger");
                    return false;
                }
            }
        }
        true
    }
}

/// Invariant: the two players mark with different tokens.
pub struct TokensDistinct;

impl TokensDistinct {
    /// Checks that the players' tokens differ.
    pub fn holds(state: &GameState) -> bool {
        let distinct =
            state.player(Seat::Human).token() != state.player(Seat::Computer).token();
        if !distinct {
            warn!("both players hold the same token");
        }
        distinct
    }
}

/// Invariant: the stored status agrees with the board.
pub struct StatusCurrent;

impl StatusCurrent {
    /// Re-evaluates the position and compares it to the stored status.
    pub fn holds(state: &GameState) -> bool {
        let current = state.status() == state.evaluate();
        if !current {
            warn!(status = ?state.status(), "stored status is stale");
        }
        current
    }
}

/// Debug-build consistency pass, run after every mutation.
pub(crate) fn debug_check(state: &GameState) {
    debug_assert!(
        LedgersMirrorBoard::holds(state),
        "ledgers must mirror the board"
    );
    debug_assert!(TokensDistinct::holds(state), "player tokens must differ");
    debug_assert!(
        StatusCurrent::holds(state),
        "stored status must match the board"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Token};

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::from_human_token(Token::X);
        assert!(LedgersMirrorBoard::holds(&state));
        assert!(TokensDistinct::holds(&state));
        assert!(StatusCurrent::holds(&state));
    }

    #[test]
    fn test_played_moves_hold() {
        let mut state = GameState::from_human_token(Token::X);
        state.apply_human_move(5).expect("center is open");
        state.request_computer_move().expect("computer to move");
        state.apply_human_move(9).expect("cell 9 is open");
        assert!(LedgersMirrorBoard::holds(&state));
        assert!(StatusCurrent::holds(&state));
    }

    #[test]
    fn test_detects_a_board_mark_missing_from_the_ledgers() {
        let mut state = GameState::from_human_token(Token::X);
        state.apply_human_move(5).expect("center is open");
        // Mark the board behind the ledgers' backs.
        state
            .board
            .occupy(Cell::TopLeft, Token::X)
            .expect("top-left is open");
        assert!(!LedgersMirrorBoard::holds(&state));
    }

    #[test]
    fn test_detects_a_ledger_entry_missing_from_the_board() {
        let mut state = GameState::from_human_token(Token::X);
        state.human.ledger.record(Cell::TopLeft);
        assert!(!LedgersMirrorBoard::holds(&state));
    }

    #[test]
    fn test_detects_a_claim_on_the_opponents_cell() {
        let mut state = GameState::from_human_token(Token::X);
        state.apply_human_move(5).expect("center is open");
        // The computer's ledger claims the human's mark.
        state.computer.ledger.record(Cell::Center);
        assert!(!LedgersMirrorBoard::holds(&state));
    }

    #[test]
    fn test_detects_a_stale_status() {
        let mut state = GameState::from_human_token(Token::X);
        for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
            state.board.occupy(cell, Token::X).expect("cell is open");
            state.human.ledger.record(cell);
        }
        // The board shows a finished top row but the status was never
        // refreshed.
        assert!(!StatusCurrent::holds(&state));
    }
}
