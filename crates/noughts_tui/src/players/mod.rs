//! Sources of human moves for the game loop.

mod keyboard;
#[cfg(test)]
mod scripted;

pub use keyboard::KeyboardSource;
#[cfg(test)]
pub use scripted::ScriptedSource;

use anyhow::Result;
use noughts_engine::GameState;

/// Supplies moves for the human seat.
///
/// The computer seat never goes through this trait; its moves come
/// straight from the engine.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Produces the next cell index (1-9) to play.
    async fn next_move(&mut self, state: &GameState) -> Result<u8>;

    /// Name used in log lines.
    fn name(&self) -> &str;
}
