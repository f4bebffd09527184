//! Immutable board snapshots

use std::collections::HashSet;

use crate::coordinate::MapCoordinate;
use crate::player::SnakePlayer;

/// One tick's view of the board.
///
/// A new `Map` is produced for every MapUpdated (and GameEnded) message
/// and never mutated afterward; the client hands it to the bot and to
/// observers and then discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    width: i32,
    height: i32,
    world_tick: u64,
    snakes: Vec<SnakePlayer>,
    food_positions: HashSet<MapCoordinate>,
    obstacle_positions: HashSet<MapCoordinate>,
}

impl Map {
    pub fn new(
        width: i32,
        height: i32,
        world_tick: u64,
        snakes: Vec<SnakePlayer>,
        food_positions: HashSet<MapCoordinate>,
        obstacle_positions: HashSet<MapCoordinate>,
    ) -> Self {
        Self {
            width,
            height,
            world_tick,
            snakes,
            food_positions,
            obstacle_positions,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Server-assigned tick this snapshot belongs to. Echoed back as
    /// `gameTick` in the move registered for this update.
    pub fn world_tick(&self) -> u64 {
        self.world_tick
    }

    /// All players, in the order the server listed them.
    pub fn snakes(&self) -> &[SnakePlayer] {
        &self.snakes
    }

    pub fn snake(&self, id: &str) -> Option<&SnakePlayer> {
        self.snakes.iter().find(|s| s.id() == id)
    }

    pub fn food_positions(&self) -> &HashSet<MapCoordinate> {
        &self.food_positions
    }

    pub fn obstacle_positions(&self) -> &HashSet<MapCoordinate> {
        &self.obstacle_positions
    }

    pub fn is_food(&self, coordinate: MapCoordinate) -> bool {
        self.food_positions.contains(&coordinate)
    }

    pub fn is_obstacle(&self, coordinate: MapCoordinate) -> bool {
        self.obstacle_positions.contains(&coordinate)
    }

    /// Whether any snake occupies this square.
    pub fn is_snake(&self, coordinate: MapCoordinate) -> bool {
        self.snakes
            .iter()
            .any(|s| s.positions().contains(&coordinate))
    }

    /// A square a snake can move onto without dying this tick: inside
    /// the board, not an obstacle, not occupied by a snake.
    pub fn is_safe(&self, coordinate: MapCoordinate) -> bool {
        coordinate.is_inside_bounds(self.width, self.height)
            && !self.is_obstacle(coordinate)
            && !self.is_snake(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> Map {
        let snake = SnakePlayer::new(
            "snake-id",
            "snake",
            3,
            vec![MapCoordinate::new(1, 1), MapCoordinate::new(1, 2)],
        );
        Map::new(
            5,
            5,
            7,
            vec![snake],
            HashSet::from([MapCoordinate::new(0, 0)]),
            HashSet::from([MapCoordinate::new(4, 4)]),
        )
    }

    #[test]
    fn lookup_by_id() {
        let map = sample_map();
        assert_eq!(map.snake("snake-id").unwrap().name(), "snake");
        assert!(map.snake("other").is_none());
    }

    #[test]
    fn square_queries() {
        let map = sample_map();
        assert!(map.is_food(MapCoordinate::new(0, 0)));
        assert!(map.is_obstacle(MapCoordinate::new(4, 4)));
        assert!(map.is_snake(MapCoordinate::new(1, 2)));
        assert!(!map.is_snake(MapCoordinate::new(3, 3)));
    }

    #[test]
    fn safe_squares() {
        let map = sample_map();
        assert!(map.is_safe(MapCoordinate::new(2, 2)));
        // Food is safe to enter.
        assert!(map.is_safe(MapCoordinate::new(0, 0)));
        assert!(!map.is_safe(MapCoordinate::new(4, 4)));
        assert!(!map.is_safe(MapCoordinate::new(1, 1)));
        assert!(!map.is_safe(MapCoordinate::new(-1, 0)));
        assert!(!map.is_safe(MapCoordinate::new(5, 0)));
    }
}
