//! Protocol state machine and client loop

use tracing::{debug, info, warn};

use snake_core::{InboundMessage, OutboundMessage, Result, SnakeError, decode, encode};

use crate::bot::SnakeBot;
use crate::channel::{ChannelState, MessageChannel};
use crate::observer::{GameObserver, NoopObserver};
use crate::ws::WebSocketChannel;

/// A client for one game on a Cygni snake server.
///
/// The protocol states (registering, registered, playing, ended) are
/// encoded in the control flow of [`start`]: registration is rejected
/// or confirmed first, map updates then drive move registration, and a
/// GameEnded message (or the channel closing) terminates the loop.
///
/// [`start`]: SnakeClient::start
pub struct SnakeClient<C: MessageChannel> {
    channel: C,
    observer: Box<dyn GameObserver>,
}

impl SnakeClient<WebSocketChannel> {
    /// Connect a WebSocket to `url` and build a client around it.
    pub async fn connect(url: &str, observer: Box<dyn GameObserver>) -> Result<Self> {
        let channel = WebSocketChannel::connect(url).await?;
        Ok(Self::with_observer(channel, observer))
    }
}

impl<C: MessageChannel> SnakeClient<C> {
    /// Build a client with no observer.
    pub fn new(channel: C) -> Self {
        Self::with_observer(channel, Box::new(NoopObserver))
    }

    pub fn with_observer(channel: C, observer: Box<dyn GameObserver>) -> Self {
        Self { channel, observer }
    }

    /// Register `bot` and play one game to completion.
    ///
    /// Runs the whole protocol on the calling task: the future resolves
    /// only when the game ends (`Ok`) or the session fails (`Err`).
    /// Each inbound message is fully handled, including any outbound
    /// send it triggers, before the next receive, so a RegisterMove
    /// always carries the `gameTick` of the update that prompted it.
    ///
    /// Fails with [`SnakeError::InvalidArgument`] for an empty player
    /// name and [`SnakeError::InvalidOperation`] when the channel is
    /// not open; both checks happen before anything is sent.
    pub async fn start(&mut self, bot: &mut dyn SnakeBot) -> Result<()> {
        if bot.name().trim().is_empty() {
            return Err(SnakeError::InvalidArgument(
                "player name must not be empty".into(),
            ));
        }
        let channel_state = self.channel.state();
        if channel_state != ChannelState::Open {
            return Err(SnakeError::InvalidOperation(format!(
                "channel must be open to start, but is {channel_state:?}"
            )));
        }

        info!(player = bot.name(), "registering player");
        self.send(&OutboundMessage::RegisterPlayer {
            player_name: bot.name().to_owned(),
            game_settings: bot.game_settings(),
        })
        .await?;

        loop {
            let Some(raw) = self.channel.receive().await? else {
                return Err(SnakeError::ConnectionClosed);
            };

            match decode(&raw)? {
                InboundMessage::PlayerRegistered => {
                    info!("player registered");
                    if bot.auto_start() {
                        info!("auto-start enabled, requesting game start");
                        self.send(&OutboundMessage::StartGame).await?;
                    }
                }
                InboundMessage::InvalidPlayerName { reason } => {
                    return Err(SnakeError::InvalidOperation(format!(
                        "server rejected player name: {reason}"
                    )));
                }
                InboundMessage::GameStarting => {
                    info!("game starting");
                    self.observer.on_game_start();
                }
                InboundMessage::MapUpdated { map } => {
                    self.observer.on_update(&map);
                    let direction = bot.next_move(&map);
                    debug!(tick = map.world_tick(), %direction, "registering move");
                    self.send(&OutboundMessage::RegisterMove {
                        direction,
                        game_tick: map.world_tick(),
                    })
                    .await?;
                }
                InboundMessage::SnakeDead {
                    player_id,
                    death_reason,
                } => {
                    debug!(%player_id, %death_reason, "snake died");
                    self.observer.on_snake_died(&death_reason, &player_id);
                }
                InboundMessage::GameEnded { map } => {
                    info!(tick = map.world_tick(), "game ended");
                    self.observer.on_game_end(&map);
                    return Ok(());
                }
                InboundMessage::GameLink { url } => {
                    info!(%url, "game can be watched at link");
                    self.observer.on_game_link(&url);
                }
                InboundMessage::GenericError { message } => {
                    // Unknown message kinds are additive server changes,
                    // not a reason to abandon the game.
                    warn!(%message, "ignoring message");
                }
            }
        }
    }

    async fn send(&mut self, message: &OutboundMessage) -> Result<()> {
        let raw = encode(message)?;
        debug!(len = raw.len(), "sending message");
        self.channel.send(&raw).await
    }
}
