//! A simple survival bot

use snake_client::SnakeBot;
use snake_core::{Direction, Map, MapCoordinate};

/// Keeps moving toward the nearest food, never stepping onto a wall,
/// an obstacle or a snake. Identifies its own snake on the map by
/// player name.
#[derive(Debug)]
pub struct SafeBot {
    name: String,
    auto_start: bool,
}

impl SafeBot {
    pub fn new(name: &str, auto_start: bool) -> Self {
        Self {
            name: name.to_owned(),
            auto_start,
        }
    }

    fn distance_to_nearest_food(map: &Map, from: MapCoordinate) -> i32 {
        map.food_positions()
            .iter()
            .map(|food| from.manhattan_distance_to(*food))
            .min()
            .unwrap_or(0)
    }
}

impl SnakeBot for SafeBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn auto_start(&self) -> bool {
        self.auto_start
    }

    fn next_move(&mut self, map: &Map) -> Direction {
        let Some(snake) = map.snakes().iter().find(|s| s.name() == self.name) else {
            return Direction::Down;
        };
        if !snake.is_alive() {
            return Direction::Down;
        }

        let head = snake.head_position();
        let heading = snake.current_direction();

        // Current heading first, then the two turns; reversing is
        // always fatal so it is never a candidate.
        let mut candidates = vec![heading];
        candidates.extend(
            Direction::ALL
                .into_iter()
                .filter(|d| *d != heading && *d != heading.opposite()),
        );

        candidates
            .into_iter()
            .filter(|d| map.is_safe(head.destination(*d)))
            .min_by_key(|d| Self::distance_to_nearest_food(map, head.destination(*d)))
            // Boxed in; any move loses, keep the heading.
            .unwrap_or(heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::SnakePlayer;
    use std::collections::HashSet;

    fn map_with(snakes: Vec<SnakePlayer>, food: Vec<MapCoordinate>) -> Map {
        Map::new(
            5,
            5,
            1,
            snakes,
            food.into_iter().collect(),
            HashSet::new(),
        )
    }

    fn own_snake(positions: Vec<MapCoordinate>) -> SnakePlayer {
        SnakePlayer::new("id", "me", 0, positions)
    }

    #[test]
    fn turns_away_from_the_wall() {
        // Heading right, head at the right edge.
        let map = map_with(
            vec![own_snake(vec![
                MapCoordinate::new(4, 2),
                MapCoordinate::new(3, 2),
            ])],
            vec![],
        );
        let mut bot = SafeBot::new("me", false);
        let direction = bot.next_move(&map);
        assert!(matches!(direction, Direction::Up | Direction::Down));
    }

    #[test]
    fn keeps_heading_toward_food() {
        // Heading right with food straight ahead.
        let map = map_with(
            vec![own_snake(vec![
                MapCoordinate::new(1, 2),
                MapCoordinate::new(0, 2),
            ])],
            vec![MapCoordinate::new(4, 2)],
        );
        let mut bot = SafeBot::new("me", false);
        assert_eq!(bot.next_move(&map), Direction::Right);
    }

    #[test]
    fn defaults_to_down_when_not_on_the_map() {
        let map = map_with(vec![], vec![]);
        let mut bot = SafeBot::new("me", false);
        assert_eq!(bot.next_move(&map), Direction::Down);
    }
}
