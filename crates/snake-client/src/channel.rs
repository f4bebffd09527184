//! Transport abstraction
//!
//! The client only needs a bidirectional text-message channel; the
//! concrete transport (WebSocket in practice, scripted stubs in tests)
//! lives behind the [`MessageChannel`] trait.

use async_trait::async_trait;
use snake_core::Result;

/// Lifecycle state of a message channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// Never connected
    NotConnected,
    /// Connection attempt in progress
    Connecting,
    /// Ready for send/receive
    Open,
    /// Close handshake in progress
    Closing,
    /// Closed cleanly
    Closed,
    /// Terminated without a close handshake
    Aborted,
}

/// A bidirectional text-message transport.
#[async_trait]
pub trait MessageChannel: Send {
    /// Current transport state.
    fn state(&self) -> ChannelState;

    /// Send one text message.
    async fn send(&mut self, text: &str) -> Result<()>;

    /// Receive the next text message, waiting as long as it takes.
    /// `Ok(None)` means the channel has closed.
    async fn receive(&mut self) -> Result<Option<String>>;

    /// Close the channel.
    async fn close(&mut self) -> Result<()>;
}
