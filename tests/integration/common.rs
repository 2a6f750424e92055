use std::cell::RefCell;

use brpcli::core::rpc::{BlockchainInfo, ConnectionSummary, MempoolInfo, NetTotals, NodeRpc};
use brpcli::{BrpcError, Result};

/// In-memory node that records every query it answers
pub struct RecordingNode {
    pub pruned: bool,
    pub uptime: u64,
    /// Query name that fails with an RPC error instead of answering
    pub fail_on: Option<&'static str>,
    pub(crate) calls: RefCell<Vec<&'static str>>,
}

impl RecordingNode {
    pub fn new() -> Self {
        Self {
            pruned: false,
            uptime: 90_000,
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_on == Some(call) {
            return Err(BrpcError::Rpc(bitcoincore_rpc::Error::ReturnedError(
                "Verifying blocks...".to_string(),
            )));
        }
        Ok(())
    }
}

impl NodeRpc for RecordingNode {
    fn connections(&self) -> Result<ConnectionSummary> {
        self.record("connections")?;
        Ok(ConnectionSummary {
            inbound: 3,
            outbound: 10,
            total: 13,
        })
    }

    fn traffic(&self) -> Result<NetTotals> {
        self.record("traffic")?;
        Ok(NetTotals {
            bytes_received: 12_345_678_901,
            bytes_sent: 987_654_321,
        })
    }

    fn mempool_info(&self) -> Result<MempoolInfo> {
        self.record("mempool")?;
        Ok(MempoolInfo {
            size: 2500,
            usage: 3_100_000,
        })
    }

    fn blockchain_info(&self) -> Result<BlockchainInfo> {
        self.record("blockchain")?;
        Ok(BlockchainInfo {
            blocks: 850_123,
            size_on_disk: 620_000_000_000,
            verification_progress: 0.42,
            pruned: self.pruned,
            prune_height: self.pruned.then_some(800_000),
            prune_target_size: self.pruned.then_some(550_000_000),
        })
    }

    fn uptime(&self) -> Result<u64> {
        self.record("uptime")?;
        Ok(self.uptime)
    }

    fn version(&self) -> Result<String> {
        self.record("version")?;
        Ok("/Satoshi:27.0.0/".to_string())
    }
}

/// Run the dispatcher without color and return what it printed
pub fn run_plain(name: &str, node: &RecordingNode) -> (Result<()>, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let result = brpcli::commands::stats::execute(name, node, &mut out);
    (result, String::from_utf8(out).unwrap())
}
