//! Node query results, reduced to the fields the metrics read.

use bitcoincore_rpc::json::{
    GetBlockchainInfoResult, GetMempoolInfoResult, GetNetTotalsResult, GetNetworkInfoResult,
};

/// Peer connection counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub inbound: u64,
    pub outbound: u64,
    pub total: u64,
}

impl From<&GetNetworkInfoResult> for ConnectionSummary {
    /// Nodes older than v21 do not split connections by direction
    fn from(info: &GetNetworkInfoResult) -> Self {
        Self {
            inbound: info.connections_in.unwrap_or_default() as u64,
            outbound: info.connections_out.unwrap_or_default() as u64,
            total: info.connections as u64,
        }
    }
}

/// Cumulative bytes since node start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetTotals {
    pub bytes_received: u64,
    pub bytes_sent: u64,
}

impl From<&GetNetTotalsResult> for NetTotals {
    fn from(totals: &GetNetTotalsResult) -> Self {
        Self {
            bytes_received: totals.total_bytes_recv,
            bytes_sent: totals.total_bytes_sent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MempoolInfo {
    pub size: u64,
    /// Bytes of memory used by the pool
    pub usage: u64,
}

impl From<&GetMempoolInfoResult> for MempoolInfo {
    fn from(info: &GetMempoolInfoResult) -> Self {
        Self {
            size: info.size as u64,
            usage: info.usage as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockchainInfo {
    pub blocks: u64,
    pub size_on_disk: u64,
    pub verification_progress: f64,
    pub pruned: bool,
    /// Only reported by pruned nodes
    pub prune_height: Option<u64>,
    pub prune_target_size: Option<u64>,
}

impl From<&GetBlockchainInfoResult> for BlockchainInfo {
    fn from(info: &GetBlockchainInfoResult) -> Self {
        Self {
            blocks: info.blocks,
            size_on_disk: info.size_on_disk,
            verification_progress: info.verification_progress,
            pruned: info.pruned,
            prune_height: info.prune_height,
            prune_target_size: info.prune_target_size,
        }
    }
}
