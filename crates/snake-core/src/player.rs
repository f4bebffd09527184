//! Snake players as reported by the server

use crate::coordinate::MapCoordinate;
use crate::direction::Direction;

/// One snake on the board.
///
/// `positions[0]` is the head; the remaining entries are the body in
/// order toward the tail. A dead snake has an empty position list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakePlayer {
    id: String,
    name: String,
    points: i32,
    positions: Vec<MapCoordinate>,
}

impl SnakePlayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        points: i32,
        positions: Vec<MapCoordinate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            positions,
        }
    }

    /// Stable identity assigned by the server at registration.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    /// Head first, then body segments toward the tail.
    pub fn positions(&self) -> &[MapCoordinate] {
        &self.positions
    }

    pub fn is_alive(&self) -> bool {
        !self.positions.is_empty()
    }

    /// The head, or [`MapCoordinate::OFF_BOARD`] for a dead snake.
    pub fn head_position(&self) -> MapCoordinate {
        self.positions
            .first()
            .copied()
            .unwrap_or(MapCoordinate::OFF_BOARD)
    }

    /// Every segment except the head.
    pub fn body(&self) -> &[MapCoordinate] {
        if self.positions.is_empty() {
            &[]
        } else {
            &self.positions[1..]
        }
    }

    /// The direction this snake is currently heading.
    ///
    /// Not transmitted by the server; derived by finding the direction
    /// that steps from the neck (second segment, or the head itself for
    /// a length-1 snake) onto the head. If no direction matches, the
    /// body data is inconsistent and `Down` is returned as a deliberate
    /// lenient default.
    pub fn current_direction(&self) -> Direction {
        let head = self.head_position();
        let neck = self.body().first().copied().unwrap_or(head);
        for direction in Direction::ALL {
            if neck.destination(direction) == head {
                return direction;
            }
        }
        Direction::Down
    }
}
