//! Bitcoin Core JSON-RPC access.
//!
//! Everything above this module talks to the node through [`NodeRpc`], so
//! extractors and the dispatcher can be driven by a recording double in tests.

pub mod client;
pub mod types;

pub use client::BitcoinRpc;
pub use types::{BlockchainInfo, ConnectionSummary, MempoolInfo, NetTotals};

use crate::error::Result;

/// Queries the node. Every call is one blocking request with no retry.
pub trait NodeRpc {
    fn connections(&self) -> Result<ConnectionSummary>;

    fn traffic(&self) -> Result<NetTotals>;

    fn mempool_info(&self) -> Result<MempoolInfo>;

    fn blockchain_info(&self) -> Result<BlockchainInfo>;

    /// Seconds since the node started
    fn uptime(&self) -> Result<u64>;

    /// Node user agent, e.g. `/Satoshi:27.0.0/`
    fn version(&self) -> Result<String>;
}
