//! Wire codec for the Cygni snake protocol
//!
//! Every wire message is a JSON object with a required `type` field
//! holding a fixed namespaced identifier, e.g.
//! `se.cygni.snake.api.event.MapUpdateEvent`. Dispatch happens here,
//! once, into a closed tagged union; the client loop only ever matches
//! on [`InboundMessage`] variants.
//!
//! An unrecognized `type` decodes to [`InboundMessage::GenericError`]
//! rather than failing, so the loop stays alive across additive server
//! changes. Malformed JSON or missing required fields fail with
//! [`SnakeError::Decode`].

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::coordinate::MapCoordinate;
use crate::direction::Direction;
use crate::error::{Result, SnakeError};
use crate::map::Map;
use crate::player::SnakePlayer;
use crate::settings::GameSettings;

/// The namespaced `type` identifiers used on the wire.
pub mod message_type {
    pub const REGISTER_PLAYER: &str = "se.cygni.snake.api.request.RegisterPlayer";
    pub const START_GAME: &str = "se.cygni.snake.api.request.StartGame";
    pub const REGISTER_MOVE: &str = "se.cygni.snake.api.request.RegisterMove";

    pub const PLAYER_REGISTERED: &str = "se.cygni.snake.api.response.PlayerRegistered";
    pub const INVALID_PLAYER_NAME: &str = "se.cygni.snake.api.exception.InvalidPlayerName";
    pub const GAME_STARTING: &str = "se.cygni.snake.api.event.GameStartingEvent";
    pub const MAP_UPDATED: &str = "se.cygni.snake.api.event.MapUpdateEvent";
    pub const SNAKE_DEAD: &str = "se.cygni.snake.api.event.SnakeDeadEvent";
    pub const GAME_ENDED: &str = "se.cygni.snake.api.event.GameEndedEvent";
    pub const GAME_LINK: &str = "se.cygni.snake.api.event.GameLinkEvent";
}

/// Messages the server sends to the client.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// Registration accepted
    PlayerRegistered,
    /// Registration rejected
    InvalidPlayerName { reason: String },
    /// A game is about to begin
    GameStarting,
    /// New board state for one tick
    MapUpdated { map: Map },
    /// A snake died
    SnakeDead {
        player_id: String,
        death_reason: String,
    },
    /// Final board state; the game is over
    GameEnded { map: Map },
    /// URL where the finished game can be watched
    GameLink { url: String },
    /// Any message with an unrecognized `type`
    GenericError { message: String },
}

/// Messages the client sends to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    RegisterPlayer {
        player_name: String,
        game_settings: Option<GameSettings>,
    },
    StartGame,
    RegisterMove {
        direction: Direction,
        game_tick: u64,
    },
}

/// Decode one wire message.
pub fn decode(raw: &str) -> Result<InboundMessage> {
    let value: Value = serde_json::from_str(raw)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SnakeError::Decode("message has no 'type' field".into()))?;

    match kind {
        message_type::PLAYER_REGISTERED => Ok(InboundMessage::PlayerRegistered),
        message_type::INVALID_PLAYER_NAME => Ok(InboundMessage::InvalidPlayerName {
            reason: required_str(&value, "reason")?,
        }),
        message_type::GAME_STARTING => Ok(InboundMessage::GameStarting),
        message_type::MAP_UPDATED => Ok(InboundMessage::MapUpdated {
            map: decode_map(&value)?,
        }),
        message_type::SNAKE_DEAD => Ok(InboundMessage::SnakeDead {
            player_id: required_str(&value, "playerId")?,
            death_reason: required_str(&value, "deathReason")?,
        }),
        message_type::GAME_ENDED => Ok(InboundMessage::GameEnded {
            map: decode_map(&value)?,
        }),
        message_type::GAME_LINK => Ok(InboundMessage::GameLink {
            url: required_str(&value, "url")?,
        }),
        other => Ok(InboundMessage::GenericError {
            message: format!("unrecognized message type '{other}'"),
        }),
    }
}

/// Encode one wire message.
pub fn encode(message: &OutboundMessage) -> Result<String> {
    let value = match message {
        OutboundMessage::RegisterPlayer {
            player_name,
            game_settings,
        } => {
            let mut object = json!({
                "type": message_type::REGISTER_PLAYER,
                "playerName": player_name,
            });
            if let Some(settings) = game_settings {
                object["gameSettings"] = serde_json::to_value(settings)?;
            }
            object
        }
        OutboundMessage::StartGame => json!({ "type": message_type::START_GAME }),
        OutboundMessage::RegisterMove {
            direction,
            game_tick,
        } => json!({
            "type": message_type::REGISTER_MOVE,
            "direction": direction.as_wire_str(),
            "gameTick": game_tick,
        }),
    };
    serde_json::to_string(&value).map_err(Into::into)
}

fn required_str(value: &Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| SnakeError::Decode(format!("missing required field '{field}'")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapPayload {
    width: i32,
    height: i32,
    world_tick: u64,
    snake_infos: Vec<SnakeInfoPayload>,
    food_positions: Vec<i32>,
    obstacle_positions: Vec<i32>,
}

#[derive(Deserialize)]
struct SnakeInfoPayload {
    id: String,
    name: String,
    points: i32,
    positions: Vec<i32>,
}

fn decode_map(envelope: &Value) -> Result<Map> {
    let payload = envelope
        .get("map")
        .ok_or_else(|| SnakeError::Decode("missing required field 'map'".into()))?;
    let payload = MapPayload::deserialize(payload)
        .map_err(|e| SnakeError::Decode(format!("bad map payload: {e}")))?;

    let snakes = payload
        .snake_infos
        .into_iter()
        .map(|info| {
            let positions = coordinates_from_pairs(&info.positions, "snake positions")?;
            Ok(SnakePlayer::new(info.id, info.name, info.points, positions))
        })
        .collect::<Result<Vec<_>>>()?;

    let food: HashSet<_> = coordinates_from_pairs(&payload.food_positions, "foodPositions")?
        .into_iter()
        .collect();
    let obstacles: HashSet<_> =
        coordinates_from_pairs(&payload.obstacle_positions, "obstaclePositions")?
            .into_iter()
            .collect();

    Ok(Map::new(
        payload.width,
        payload.height,
        payload.world_tick,
        snakes,
        food,
        obstacles,
    ))
}

/// Consecutive pairs in `flat` are (x, y) coordinates.
fn coordinates_from_pairs(flat: &[i32], what: &str) -> Result<Vec<MapCoordinate>> {
    if flat.len() % 2 != 0 {
        return Err(SnakeError::Decode(format!(
            "{what} has odd length {}",
            flat.len()
        )));
    }
    Ok(flat
        .chunks_exact(2)
        .map(|pair| MapCoordinate::new(pair[0], pair[1]))
        .collect())
}
