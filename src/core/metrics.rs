//! Metric extractors: one per category, each turning raw RPC fields into
//! display-ready rows.

use std::fmt;
use std::str::FromStr;

use super::rpc::NodeRpc;
use super::units::{convert_bytes, round2, BYTES_PER_MB};
use crate::error::{BrpcError, Result};

/// Ordered `(label, value)` rows for one metric category.
///
/// Values are already unit-resolved and rounded; rendering only lays them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricReport {
    pub label: &'static str,
    pub rows: Vec<(String, String)>,
}

impl MetricReport {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: &str, value: impl ToString) -> Self {
        self.rows.push((label.to_string(), value.to_string()));
        self
    }

    /// Row labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Metric categories the tool can report on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Blockchain,
    Connections,
    Traffic,
    Mempool,
}

impl Metric {
    /// Declaration order, which is also the order `stats` runs them in
    pub const ALL: [Metric; 4] = [
        Metric::Blockchain,
        Metric::Connections,
        Metric::Traffic,
        Metric::Mempool,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Blockchain => "blockchain",
            Metric::Connections => "connections",
            Metric::Traffic => "traffic",
            Metric::Mempool => "mempool",
        }
    }

    pub fn extract<R: NodeRpc + ?Sized>(&self, rpc: &R) -> Result<MetricReport> {
        match self {
            Metric::Blockchain => blockchain(rpc),
            Metric::Connections => connections(rpc),
            Metric::Traffic => traffic(rpc),
            Metric::Mempool => mempool(rpc),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = BrpcError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| BrpcError::unsupported_command(s))
    }
}

pub fn connections<R: NodeRpc + ?Sized>(rpc: &R) -> Result<MetricReport> {
    let conns = rpc.connections()?;

    Ok(MetricReport::new(Metric::Connections.name())
        .row("Inbound", conns.inbound)
        .row("Outbound", conns.outbound)
        .row("Total", conns.total))
}

pub fn traffic<R: NodeRpc + ?Sized>(rpc: &R) -> Result<MetricReport> {
    let totals = rpc.traffic()?;

    Ok(MetricReport::new(Metric::Traffic.name())
        .row("Sent", convert_bytes(totals.bytes_sent))
        .row("Received", convert_bytes(totals.bytes_received)))
}

/// Memory usage always uses the MB divisor, even past one gigabyte.
pub fn mempool<R: NodeRpc + ?Sized>(rpc: &R) -> Result<MetricReport> {
    let info = rpc.mempool_info()?;
    let usage_mb = round2(info.usage as f64 / BYTES_PER_MB);

    Ok(MetricReport::new(Metric::Mempool.name())
        .row("TX Count", info.size)
        .row("Memory Usage", format!("{:.2} MB", usage_mb)))
}

pub fn blockchain<R: NodeRpc + ?Sized>(rpc: &R) -> Result<MetricReport> {
    let info = rpc.blockchain_info()?;

    let mut report =
        MetricReport::new(Metric::Blockchain.name()).row("Block Height", info.blocks);

    if info.pruned {
        let height = info
            .prune_height
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string());
        let target = info
            .prune_target_size
            .map(|size| convert_bytes(size).to_string())
            .unwrap_or_else(|| "-".to_string());
        report = report.row("Prune Height", height).row("Prune Target", target);
    }

    let progress = (info.verification_progress * 100.0).round() as u64;

    Ok(report
        .row("Disk Usage", convert_bytes(info.size_on_disk))
        .row("Progress", format!("{}%", progress)))
}
