//! Board coordinates

use crate::direction::Direction;

/// A position on the board. The grid is zero-indexed with `(0, 0)` in
/// the upper-left corner; `x` grows rightward and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapCoordinate {
    pub x: i32,
    pub y: i32,
}

impl MapCoordinate {
    /// Sentinel for "no position", e.g. the head of a dead snake.
    pub const OFF_BOARD: MapCoordinate = MapCoordinate { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `direction`. No wraparound and
    /// no clamping; callers bounds-check with [`is_inside_bounds`].
    ///
    /// [`is_inside_bounds`]: MapCoordinate::is_inside_bounds
    pub fn destination(self, direction: Direction) -> MapCoordinate {
        match direction {
            Direction::Up => MapCoordinate::new(self.x, self.y - 1),
            Direction::Down => MapCoordinate::new(self.x, self.y + 1),
            Direction::Left => MapCoordinate::new(self.x - 1, self.y),
            Direction::Right => MapCoordinate::new(self.x + 1, self.y),
        }
    }

    /// Whether this coordinate lies on a board of the given dimensions.
    pub fn is_inside_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }

    pub fn manhattan_distance_to(self, other: MapCoordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_steps_one_square() {
        let origin = MapCoordinate::new(5, 5);
        assert_eq!(origin.destination(Direction::Up), MapCoordinate::new(5, 4));
        assert_eq!(origin.destination(Direction::Down), MapCoordinate::new(5, 6));
        assert_eq!(origin.destination(Direction::Left), MapCoordinate::new(4, 5));
        assert_eq!(origin.destination(Direction::Right), MapCoordinate::new(6, 5));
    }

    #[test]
    fn destination_does_not_clamp_at_edges() {
        let corner = MapCoordinate::new(0, 0);
        assert_eq!(corner.destination(Direction::Up), MapCoordinate::new(0, -1));
        assert!(!corner.destination(Direction::Up).is_inside_bounds(10, 10));
    }

    #[test]
    fn bounds_check() {
        assert!(MapCoordinate::new(0, 0).is_inside_bounds(3, 3));
        assert!(MapCoordinate::new(2, 2).is_inside_bounds(3, 3));
        assert!(!MapCoordinate::new(3, 2).is_inside_bounds(3, 3));
        assert!(!MapCoordinate::new(2, 3).is_inside_bounds(3, 3));
        assert!(!MapCoordinate::OFF_BOARD.is_inside_bounds(3, 3));
    }

    #[test]
    fn manhattan_distance() {
        let a = MapCoordinate::new(1, 2);
        let b = MapCoordinate::new(4, 0);
        assert_eq!(a.manhattan_distance_to(b), 5);
        assert_eq!(b.manhattan_distance_to(a), 5);
    }
}
