use std::io;
use thiserror::Error;

/// Custom error type for brpcli
#[derive(Error, Debug)]
pub enum BrpcError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Node RPC error: {0}")]
    Rpc(#[from] bitcoincore_rpc::Error),

    #[error("Invalid RPC endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),
}

/// Result type alias for brpcli
pub type Result<T> = std::result::Result<T, BrpcError>;

impl BrpcError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BrpcError::Config(msg.into())
    }

    pub fn unsupported_command<S: Into<String>>(name: S) -> Self {
        BrpcError::UnsupportedCommand(name.into())
    }
}
