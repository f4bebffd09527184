//! # snake-client
//!
//! The protocol state machine for playing on a Cygni snake server.
//!
//! [`SnakeClient`] owns an abstract text-message [`MessageChannel`],
//! registers a player, and then drives a strictly sequential receive
//! loop: each inbound message is decoded, dispatched, and fully handled
//! (including any outbound send it triggers) before the next receive
//! begins. Decision making is delegated to a [`SnakeBot`]; lifecycle
//! events are reported to a [`GameObserver`].
//!
//! A ready-made [`WebSocketChannel`] connects to real servers.

pub mod bot;
pub mod channel;
pub mod client;
pub mod observer;
pub mod ws;

pub use bot::SnakeBot;
pub use channel::{ChannelState, MessageChannel};
pub use client::SnakeClient;
pub use observer::{GameObserver, NoopObserver};
pub use ws::WebSocketChannel;
