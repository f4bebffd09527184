//! The decision-making contract

use snake_core::{Direction, GameSettings, Map};

/// A snake-playing bot.
///
/// The client invokes [`next_move`] at most once per map update,
/// strictly after that update's observer notification, and echoes the
/// returned direction back to the server for the tick that prompted it.
/// The computation is synchronous and unbounded; a slow bot simply
/// delays the whole loop.
///
/// [`next_move`]: SnakeBot::next_move
pub trait SnakeBot: Send + std::fmt::Debug {
    /// Player name claimed at registration.
    fn name(&self) -> &str;

    /// Whether to request game start immediately after registration,
    /// without an external trigger. Consulted once.
    fn auto_start(&self) -> bool {
        false
    }

    /// Game settings to request at registration, if any.
    fn game_settings(&self) -> Option<GameSettings> {
        None
    }

    /// Pick a direction for the given board snapshot.
    fn next_move(&mut self, map: &Map) -> Direction;
}
