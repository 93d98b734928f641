//! Tokens, square occupancy, and the board itself.

use crate::{Cell, Error, Tier};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A play token, the mark a player draws on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// The x mark.
    X,
    /// The o mark.
    O,
}

impl Token {
    /// Returns the other token.
    pub fn other(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    /// Character form used on the board and in prompts.
    pub fn as_char(self) -> char {
        match self {
            Token::X => 'x',
            Token::O => 'o',
        }
    }

    /// Parses a token choice, either case. Anything else is rejected
    /// with `InvalidTokenChoice`.
    pub fn from_char(c: char) -> Result<Self, Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Token::X),
            'o' => Ok(Token::O),
            _ => Err(Error::InvalidTokenChoice(c)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// What occupies a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing yet.
    Empty,
    /// A placed token.
    Marked(Token),
}

/// The 3x3 grid, the one authoritative record of occupancy.
///
/// Tier availability is derived from this state on demand; there are
/// no separately maintained tier pools to drift out of sync. A square
/// transitions Empty to Marked at most once per game and never back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// State of the square at a cell.
    pub fn square(&self, cell: Cell) -> Square {
        self.squares[cell.offset()]
    }

    /// Checks whether a cell is still open.
    pub fn is_available(&self, cell: Cell) -> bool {
        self.square(cell) == Square::Empty
    }

    /// Marks a cell with a token.
    ///
    /// Exactly that cell changes. Placing on a marked square fails
    /// with `CellOccupied` and leaves the board untouched.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, cell: Cell, token: Token) -> Result<(), Error> {
        if !self.is_available(cell) {
            return Err(Error::CellOccupied(cell));
        }
        self.squares[cell.offset()] = Square::Marked(token);
        Ok(())
    }

    /// Open cells of a tier, in the tier's canonical order.
    pub fn available_in(&self, tier: Tier) -> Vec<Cell> {
        tier.cells()
            .iter()
            .copied()
            .filter(|cell| self.is_available(*cell))
            .collect()
    }

    /// Checks whether every square is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Plain-text grid, numbering the open cells.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = Cell::ALL[row * 3 + col];
                match self.square(cell) {
                    Square::Empty => out.push_str(&cell.index().to_string()),
                    Square::Marked(token) => out.push(token.as_char()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_fully_open() {
        let board = Board::new();
        assert!(!board.is_full());
        for cell in Cell::ALL {
            assert!(board.is_available(cell));
            assert_eq!(board.square(cell), Square::Empty);
        }
    }

    #[test]
    fn test_occupy_marks_exactly_one_cell() {
        let mut board = Board::new();
        board.occupy(Cell::Center, Token::X).expect("center is open");
        assert_eq!(board.square(Cell::Center), Square::Marked(Token::X));
        let marked = Cell::ALL.iter().filter(|c| !board.is_available(**c)).count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn test_occupy_rejects_a_marked_cell() {
        let mut board = Board::new();
        board.occupy(Cell::Center, Token::X).expect("center is open");
        let err = board.occupy(Cell::Center, Token::O).unwrap_err();
        assert_eq!(err, Error::CellOccupied(Cell::Center));
        // The first mark stands.
        assert_eq!(board.square(Cell::Center), Square::Marked(Token::X));
    }

    #[test]
    fn test_square_reads_are_stable() {
        let mut board = Board::new();
        board
            .occupy(Cell::TopLeft, Token::O)
            .expect("top-left is open");
        assert_eq!(board.square(Cell::TopLeft), board.square(Cell::TopLeft));
        assert_eq!(board.square(Cell::Center), board.square(Cell::Center));
    }

    #[test]
    fn test_tier_availability_follows_the_board() {
        let mut board = Board::new();
        let numbers = |board: &Board, tier: Tier| -> Vec<u8> {
            board.available_in(tier).iter().map(|c| c.index()).collect()
        };
        assert_eq!(numbers(&board, Tier::Corner), vec![1, 3, 7, 9]);

        board
            .occupy(Cell::TopLeft, Token::X)
            .expect("top-left is open");
        assert_eq!(numbers(&board, Tier::Corner), vec![3, 7, 9]);
        assert_eq!(numbers(&board, Tier::Center), vec![5]);

        board.occupy(Cell::Center, Token::O).expect("center is open");
        assert!(board.available_in(Tier::Center).is_empty());
        assert_eq!(numbers(&board, Tier::Edge), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_board_fills_up() {
        let mut board = Board::new();
        let mut token = Token::X;
        for cell in Cell::ALL {
            assert!(!board.is_full());
            board.occupy(cell, token).expect("cell is open");
            token = token.other();
        }
        assert!(board.is_full());
        for tier in Tier::PRIORITY {
            assert!(board.available_in(tier).is_empty());
        }
    }

    #[test]
    fn test_display_numbers_the_open_cells() {
        let mut board = Board::new();
        board
            .occupy(Cell::TopLeft, Token::X)
            .expect("top-left is open");
        board.occupy(Cell::Center, Token::O).expect("center is open");
        assert_eq!(board.display(), "x|2|3\n-+-+-\n4|o|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!(Token::from_char('x'), Ok(Token::X));
        assert_eq!(Token::from_char('O'), Ok(Token::O));
        assert_eq!(Token::from_char('q'), Err(Error::InvalidTokenChoice('q')));
        assert_eq!(Token::X.other(), Token::O);
    }
}
