//! # snake-core
//!
//! Domain model and wire codec for the Cygni snake protocol.
//!
//! This crate provides the foundational types used by the client:
//! - Board coordinates and movement directions
//! - Map snapshots and snake players
//! - Protocol messages and the JSON codec
//! - Game settings for registration

pub mod coordinate;
pub mod direction;
pub mod error;
pub mod map;
pub mod player;
pub mod protocol;
pub mod settings;

pub use coordinate::MapCoordinate;
pub use direction::Direction;
pub use error::{Result, SnakeError};
pub use map::Map;
pub use player::SnakePlayer;
pub use protocol::{InboundMessage, OutboundMessage, decode, encode, message_type};
pub use settings::GameSettings;
