use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::io;

use brpcli::commands;
use brpcli::core::config::RpcConfig;
use brpcli::core::rpc::BitcoinRpc;

fn main() -> Result<()> {
    let matches = Command::new("brpcli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Operational statistics from a Bitcoin Core node over JSON-RPC")
        .after_help(format!(
            "Commands: {}\n\nEnvironment:\n    BITCOIN_RPC_HOST      Node address (default 127.0.0.1)\n    BITCOIN_RPC_PORT      Node RPC port (default 8332)\n    BITCOIN_RPC_USER      RPC user (with BITCOIN_RPC_PASSWORD)\n    BITCOIN_DATADIR       Directory holding bitcoin.conf and .cookie",
            commands::stats::supported_commands().join(", ")
        ))
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("command")
                .help("Metric to show, or 'stats' for all of them")
                .required_unless_present("version")
                .index(1),
        )
        .get_matches();

    if matches.get_flag("version") {
        return commands::version::execute();
    }

    brpcli::init_logging();

    let name = matches
        .get_one::<String>("command")
        .context("Command argument is required")?;

    let mut stdout = io::stdout().lock();

    // Reject unknown commands before any credential lookup or RPC call
    let command = match commands::stats::validate(name, &mut stdout) {
        Ok(command) => command,
        Err(_) => std::process::exit(1),
    };

    let config = RpcConfig::load().context("Failed to resolve RPC configuration")?;
    log::debug!("Querying node at {}:{}", config.host, config.port);

    let rpc = BitcoinRpc::from_config(&config).context("Failed to create RPC client")?;

    commands::stats::run(command, &rpc, &mut stdout)
        .with_context(|| format!("Failed to run '{}'", command))?;

    Ok(())
}
