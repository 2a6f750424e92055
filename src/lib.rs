// brpcli library - public API

// Re-export error types
pub mod error;
pub use error::{BrpcError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::RpcConfig;
pub use crate::core::metrics::{Metric, MetricReport};
pub use crate::core::rpc::{BitcoinRpc, NodeRpc};

/// Initialize logging. Defaults to `warn`; `RUST_LOG` overrides it.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
