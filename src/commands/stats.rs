use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::core::metrics::Metric;
use crate::core::rpc::NodeRpc;
use crate::core::uptime::humanize_uptime;
use crate::error::{BrpcError, Result};
use crate::ui::report::{format_row, write_report};

/// Composite command that runs every metric
pub const STATS_COMMAND: &str = "stats";

/// A validated command-line command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsCommand {
    Single(Metric),
    All,
}

impl StatsCommand {
    /// Metrics to collect, in render order
    pub fn metrics(&self) -> Vec<Metric> {
        match self {
            StatsCommand::Single(metric) => vec![*metric],
            StatsCommand::All => Metric::ALL.to_vec(),
        }
    }
}

impl FromStr for StatsCommand {
    type Err = BrpcError;

    fn from_str(s: &str) -> Result<Self> {
        if s == STATS_COMMAND {
            return Ok(StatsCommand::All);
        }
        s.parse().map(StatsCommand::Single)
    }
}

impl fmt::Display for StatsCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsCommand::Single(metric) => write!(f, "{}", metric),
            StatsCommand::All => f.write_str(STATS_COMMAND),
        }
    }
}

/// Every accepted command name, `stats` last
pub fn supported_commands() -> Vec<&'static str> {
    Metric::ALL
        .iter()
        .map(Metric::name)
        .chain(std::iter::once(STATS_COMMAND))
        .collect()
}

pub fn write_unsupported<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Error: unsupported command '{}'", name).red().bold()
    )?;
    writeln!(out, "Supported commands: {}", supported_commands().join(", "))
}

/// Render every selected report, then the node's uptime and version.
///
/// The first RPC failure aborts the run; reports already written stay written.
pub fn run<R, W>(command: StatsCommand, rpc: &R, out: &mut W) -> Result<()>
where
    R: NodeRpc + ?Sized,
    W: Write,
{
    for metric in command.metrics() {
        log::debug!("Collecting {} metrics", metric);
        let report = metric.extract(rpc)?;
        write_report(out, &report)?;
    }

    let uptime = rpc.uptime()?;
    writeln!(out, "{}", format_row("Uptime", &humanize_uptime(uptime)))?;

    let version = rpc.version()?;
    writeln!(out, "{}", format_row("Version", &version))?;

    Ok(())
}

/// Parse `name` into a command.
///
/// An unknown name is reported to `out` together with the supported list and
/// returned as [`BrpcError::UnsupportedCommand`].
pub fn validate<W: Write>(name: &str, out: &mut W) -> Result<StatsCommand> {
    match name.parse::<StatsCommand>() {
        Ok(command) => Ok(command),
        Err(e) => {
            write_unsupported(out, name)?;
            Err(e)
        }
    }
}

/// Validate `name` and run it. Nothing is asked of the node for an unknown
/// name.
pub fn execute<R, W>(name: &str, rpc: &R, out: &mut W) -> Result<()>
where
    R: NodeRpc + ?Sized,
    W: Write,
{
    let command = validate(name, out)?;
    run(command, rpc, out)
}
