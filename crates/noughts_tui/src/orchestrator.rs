//! Turn loop between the human seat and the engine.

use crate::players::MoveSource;
use anyhow::Result;
use noughts_engine::{Cell, Error, GameState, GameStatus, Seat, Tactic};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Messages sent from the orchestrator to the UI loop.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A fresh game started with this seat moving first.
    Started { first: Seat },
    /// The computer is choosing a move.
    Thinking,
    /// A move landed on the board.
    MoveMade {
        seat: Seat,
        cell: Cell,
        tactic: Option<Tactic>,
        state: GameState,
    },
    /// A human move was rejected; the turn stays with the human.
    Rejected { reason: String },
    /// The game reached a terminal status.
    GameOver { status: GameStatus },
}

/// Alternates turns between a human move source and the engine.
///
/// Rejected human moves re-prompt the same seat. Engine failures end
/// the loop with an error.
pub struct Orchestrator<S> {
    state: GameState,
    source: S,
    to_move: Seat,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    pause: Duration,
}

impl<S: MoveSource> Orchestrator<S> {
    /// Creates an orchestrator over a freshly opened game.
    pub fn new(
        state: GameState,
        source: S,
        first: Seat,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        pause: Duration,
    ) -> Self {
        Self {
            state,
            source,
            to_move: first,
            event_tx,
            pause,
        }
    }

    /// Runs the game to completion.
    pub async fn run(mut self) -> Result<GameStatus> {
        info!(source = %self.source.name(), first = %self.to_move, "Starting game orchestration");

        self.event_tx.send(GameEvent::Started {
            first: self.to_move,
        })?;

        while !self.state.is_over() {
            match self.to_move {
                Seat::Computer => self.computer_turn().await?,
                Seat::Human => self.human_turn().await?,
            }
        }

        let status = self.state.status();
        info!(status = ?status, "Game over");
        debug!(board = ?self.state.board().display(), "Final position");
        self.event_tx.send(GameEvent::GameOver { status })?;

        Ok(status)
    }

    async fn computer_turn(&mut self) -> Result<()> {
        self.event_tx.send(GameEvent::Thinking)?;
        sleep(self.pause).await;

        let decision = self.state.request_computer_move()?;
        debug!(%decision, "Computer move");

        self.event_tx.send(GameEvent::MoveMade {
            seat: Seat::Computer,
            cell: decision.cell,
            tactic: Some(decision.tactic),
            state: self.state.clone(),
        })?;
        self.to_move = self.to_move.opponent();

        Ok(())
    }

    async fn human_turn(&mut self) -> Result<()> {
        debug!(source = %self.source.name(), "Waiting for move");
        let index = self.source.next_move(&self.state).await?;

        match self.state.apply_human_move(index) {
            Ok(cell) => {
                self.event_tx.send(GameEvent::MoveMade {
                    seat: Seat::Human,
                    cell,
                    tactic: None,
                    state: self.state.clone(),
                })?;
                self.to_move = self.to_move.opponent();
            }
            Err(err @ (Error::InvalidCell(_) | Error::CellOccupied(_))) => {
                warn!(index, error = %err, "Rejected human move");
                self.event_tx.send(GameEvent::Rejected {
                    reason: err.to_string(),
                })?;
            }
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}
