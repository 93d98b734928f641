//! Application state for the terminal session.

use crate::input;
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use noughts_engine::{Board, Cell, GameState, GameStatus, Seat, Token};
use tracing::debug;

const TOKEN_PROMPT: &str = "Choose your token: press 'x' or 'o'.";

/// Where the session currently stands.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Waiting for the player to pick a token.
    ChoosingToken,
    /// A game is running.
    Playing(GameState),
    /// The game ended; the final board stays on screen.
    Over(GameState, GameStatus),
}

/// Session state the UI draws from: phase, cursor, and status line.
///
/// The game itself lives in the orchestrator task; this holds the
/// latest snapshot it sent.
pub struct App {
    phase: Phase,
    cursor: Cell,
    status: String,
}

impl App {
    /// Creates a session waiting for a token choice.
    pub fn new() -> Self {
        Self {
            phase: Phase::ChoosingToken,
            cursor: Cell::Center,
            status: TOKEN_PROMPT.to_string(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Cursor position on the board.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The board to draw, once a game has started.
    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            Phase::ChoosingToken => None,
            Phase::Playing(state) | Phase::Over(state, _) => Some(state.board()),
        }
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(..))
    }

    /// Resolves a token choice keypress.
    ///
    /// Returns the chosen token when the key names one; otherwise
    /// records the rejection in the status line.
    pub fn choose_token(&mut self, c: char) -> Option<Token> {
        match Token::from_char(c) {
            Ok(token) => Some(token),
            Err(err) => {
                self.status = format!("{err}. Press 'x' or 'o'.");
                None
            }
        }
    }

    /// Switches to the playing phase over a freshly opened game.
    pub fn start(&mut self, state: GameState) {
        let token = state.player(Seat::Human).token();
        debug!(%token, "Game started");
        self.status = format!("You play {token}.");
        self.cursor = Cell::Center;
        self.phase = Phase::Playing(state);
    }

    /// Moves the cursor in response to an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        if matches!(self.phase, Phase::Playing(_)) {
            self.cursor = input::move_cursor(self.cursor, key);
        }
    }

    /// Handles a game event from the orchestrator.
    ///
    /// During token selection no game is live, so anything arriving
    /// then is a leftover from a torn-down session and is dropped.
    pub fn handle_event(&mut self, event: GameEvent) {
        if matches!(self.phase, Phase::ChoosingToken) {
            debug!(?event, "Dropping event outside a game");
            return;
        }
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Started { first } => {
                self.status = match first {
                    Seat::Human => "You move first. Pick a square.".to_string(),
                    Seat::Computer => "The computer moves first.".to_string(),
                };
            }
            GameEvent::Thinking => {
                self.status = "The computer is thinking...".to_string();
            }
            GameEvent::MoveMade {
                seat,
                cell,
                tactic,
                state,
            } => {
                self.status = match (seat, tactic) {
                    (Seat::Computer, Some(tactic)) => {
                        format!("The computer takes {} ({tactic}). Your turn.", cell.label())
                    }
                    _ => format!("You take {}.", cell.label()),
                };
                self.phase = Phase::Playing(state);
            }
            GameEvent::Rejected { reason } => {
                self.status = format!("{reason}. Try again.");
            }
            GameEvent::GameOver { status } => {
                let hint = "Press 'r' for a new game or 'q' to quit";
                self.status = match status {
                    GameStatus::Won(Seat::Human) => format!("You win! {hint}."),
                    GameStatus::Won(Seat::Computer) => format!("Computer wins! {hint}."),
                    GameStatus::Tied => format!("It's a tie. {hint}."),
                    GameStatus::InProgress => return,
                };
                if let Phase::Playing(state) = &self.phase {
                    self.phase = Phase::Over(state.clone(), status);
                }
            }
        }
    }

    /// Returns to token selection for a new game.
    pub fn restart(&mut self) {
        debug!("Restarting session");
        self.phase = Phase::ChoosingToken;
        self.cursor = Cell::Center;
        self.status = TOKEN_PROMPT.to_string();
    }
}
