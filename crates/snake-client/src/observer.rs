//! Game lifecycle observation

use snake_core::Map;

/// Receives game lifecycle notifications.
///
/// All callbacks fire synchronously on the client loop's task, in the
/// exact order messages were decoded from the channel; none is skipped
/// or reordered. Only legitimate game-state events arrive here —
/// client-side protocol errors surface from `start`, never through the
/// observer.
pub trait GameObserver: Send {
    fn on_game_start(&mut self) {}

    fn on_game_end(&mut self, map: &Map) {
        let _ = map;
    }

    fn on_update(&mut self, map: &Map) {
        let _ = map;
    }

    fn on_snake_died(&mut self, reason: &str, snake_id: &str) {
        let _ = (reason, snake_id);
    }

    fn on_game_link(&mut self, url: &str) {
        let _ = url;
    }
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
