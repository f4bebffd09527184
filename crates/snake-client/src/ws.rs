//! WebSocket transport

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

use snake_core::{Result, SnakeError};

use crate::channel::{ChannelState, MessageChannel};

/// [`MessageChannel`] over a WebSocket connection.
///
/// Text frames carry the protocol. Ping, pong and binary frames are
/// skipped; a close frame or the end of the stream reports the channel
/// as closed.
pub struct WebSocketChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    state: ChannelState,
}

impl WebSocketChannel {
    /// Open a connection to a `ws://` or `wss://` URL.
    pub async fn connect(url: &str) -> Result<Self> {
        debug!(url, "connecting");
        let (stream, _response) = connect_async(url)
            .await
            .map_err(|e| SnakeError::Transport(format!("connect to {url} failed: {e}")))?;
        Ok(Self {
            stream,
            state: ChannelState::Open,
        })
    }
}

#[async_trait]
impl MessageChannel for WebSocketChannel {
    fn state(&self) -> ChannelState {
        self.state
    }

    async fn send(&mut self, text: &str) -> Result<()> {
        match self.stream.send(Message::Text(text.to_owned())).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.state = ChannelState::Aborted;
                Err(SnakeError::Transport(format!("send failed: {e}")))
            }
        }
    }

    async fn receive(&mut self) -> Result<Option<String>> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Close(_))) | None => {
                    self.state = ChannelState::Closed;
                    return Ok(None);
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    self.state = ChannelState::Aborted;
                    return Err(SnakeError::Transport(format!("receive failed: {e}")));
                }
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.state = ChannelState::Closing;
        self.stream
            .close(None)
            .await
            .map_err(|e| SnakeError::Transport(format!("close failed: {e}")))?;
        self.state = ChannelState::Closed;
        Ok(())
    }
}
