//! Move source fed by the terminal input loop.

use super::MoveSource;
use anyhow::Result;
use noughts_engine::GameState;
use tokio::sync::mpsc;

/// Human move source reading cell picks from a channel.
///
/// The input loop owns the keyboard and the cursor, so picks arrive
/// here already resolved to a cell index.
pub struct KeyboardSource {
    picks_rx: mpsc::UnboundedReceiver<u8>,
}

impl KeyboardSource {
    /// Creates a source reading picks from `picks_rx`.
    pub fn new(picks_rx: mpsc::UnboundedReceiver<u8>) -> Self {
        Self { picks_rx }
    }
}

#[async_trait::async_trait]
impl MoveSource for KeyboardSource {
    async fn next_move(&mut self, _state: &GameState) -> Result<u8> {
        match self.picks_rx.recv().await {
            Some(index) => Ok(index),
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}
