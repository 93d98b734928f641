//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_engine::Cell;

/// Moves the cursor one square in the direction of an arrow key.
///
/// The cursor stays put at the board edge and for any non-arrow key.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.offset() / 3, cursor.offset() % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Cell::ALL[row * 3 + col]
}
