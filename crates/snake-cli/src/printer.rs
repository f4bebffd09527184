//! Console rendering of game events

use snake_client::GameObserver;
use snake_core::{Map, MapCoordinate};

/// Observer that prints the board and lifecycle events to stdout.
pub struct GamePrinter;

impl GamePrinter {
    pub fn new() -> Self {
        Self
    }
}

fn square_char(map: &Map, coordinate: MapCoordinate) -> char {
    if map.snakes().iter().any(|s| s.head_position() == coordinate) {
        '@'
    } else if map.snakes().iter().any(|s| s.body().contains(&coordinate)) {
        'o'
    } else if map.is_obstacle(coordinate) {
        '#'
    } else if map.is_food(coordinate) {
        '*'
    } else {
        '.'
    }
}

fn render(map: &Map) -> String {
    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            out.push(square_char(map, MapCoordinate::new(x, y)));
        }
        out.push('\n');
    }
    out
}

impl GameObserver for GamePrinter {
    fn on_game_start(&mut self) {
        println!("Game is starting");
    }

    fn on_update(&mut self, map: &Map) {
        println!("tick {}", map.world_tick());
        print!("{}", render(map));
    }

    fn on_game_end(&mut self, map: &Map) {
        println!("Game ended, final scores:");
        let mut snakes: Vec<_> = map.snakes().iter().collect();
        snakes.sort_by_key(|s| std::cmp::Reverse(s.points()));
        for snake in snakes {
            println!("  {} - {} pts", snake.name(), snake.points());
        }
    }

    fn on_snake_died(&mut self, reason: &str, snake_id: &str) {
        println!("Snake {snake_id} died: {reason}");
    }

    fn on_game_link(&mut self, url: &str) {
        println!("Watch the game at {url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::SnakePlayer;
    use std::collections::HashSet;

    #[test]
    fn renders_heads_bodies_food_and_obstacles() {
        let map = Map::new(
            3,
            3,
            1,
            vec![SnakePlayer::new(
                "snake-id",
                "snake",
                0,
                vec![MapCoordinate::new(0, 1), MapCoordinate::new(0, 2)],
            )],
            HashSet::from([MapCoordinate::new(2, 0)]),
            HashSet::from([MapCoordinate::new(1, 1)]),
        );
        assert_eq!(render(&map), "..*\n@#.\no..\n");
    }
}
