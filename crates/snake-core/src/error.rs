//! Error types for the snake client

use thiserror::Error;

/// Result type for snake client operations
pub type Result<T> = std::result::Result<T, SnakeError>;

/// Snake client error types
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Caller passed an unusable argument (e.g. an empty player name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not valid in the current state (channel not open,
    /// registration rejected by the server)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Malformed or unexpected wire payload
    #[error("Decode error: {0}")]
    Decode(String),

    /// Channel closed before the game ended
    #[error("Connection closed unexpectedly")]
    ConnectionClosed,

    /// Transport-level send/receive failure
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for SnakeError {
    fn from(err: serde_json::Error) -> Self {
        SnakeError::Decode(err.to_string())
    }
}
