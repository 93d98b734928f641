//! Scripted move source for driving games without a terminal.

use super::MoveSource;
use anyhow::Result;
use noughts_engine::GameState;
use std::collections::VecDeque;
use tracing::debug;

/// Plays a fixed sequence of cell indices, then fails.
pub struct ScriptedSource {
    name: String,
    picks: VecDeque<u8>,
}

impl ScriptedSource {
    /// Creates a source that plays `picks` in order.
    pub fn new(name: impl Into<String>, picks: impl IntoIterator<Item = u8>) -> Self {
        Self {
            name: name.into(),
            picks: picks.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl MoveSource for ScriptedSource {
    async fn next_move(&mut self, _state: &GameState) -> Result<u8> {
        match self.picks.pop_front() {
            Some(index) => {
                debug!(source = %self.name, index, "Scripted pick");
                Ok(index)
            }
            None => anyhow::bail!("Script ran out of moves"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
