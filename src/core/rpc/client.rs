use bitcoincore_rpc::{Auth, Client, RpcApi};
use url::Url;

use super::types::{BlockchainInfo, ConnectionSummary, MempoolInfo, NetTotals};
use super::NodeRpc;
use crate::core::config::{RpcConfig, DEFAULT_RPC_PORT};
use crate::error::Result;

/// Blocking JSON-RPC client for a Bitcoin Core node
pub struct BitcoinRpc {
    client: Client,
    endpoint: Url,
}

impl BitcoinRpc {
    /// Connect to `host` on the default mainnet RPC port
    pub fn new(user: &str, password: &str, host: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!("http://{}:{}/", host, DEFAULT_RPC_PORT))?;
        Self::connect(
            endpoint,
            Auth::UserPass(user.to_string(), password.to_string()),
        )
    }

    /// A cookie-file config reads the cookie here, so a missing or malformed
    /// cookie fails before any request is sent.
    pub fn from_config(config: &RpcConfig) -> Result<Self> {
        Self::connect(config.endpoint()?, config.auth.clone())
    }

    fn connect(endpoint: Url, auth: Auth) -> Result<Self> {
        let client = Client::new(endpoint.as_str(), auth)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl NodeRpc for BitcoinRpc {
    fn connections(&self) -> Result<ConnectionSummary> {
        log::debug!("RPC getnetworkinfo -> {}", self.endpoint);
        let info = self.client.get_network_info()?;
        Ok(ConnectionSummary::from(&info))
    }

    fn traffic(&self) -> Result<NetTotals> {
        log::debug!("RPC getnettotals -> {}", self.endpoint);
        let totals = self.client.get_net_totals()?;
        Ok(NetTotals::from(&totals))
    }

    fn mempool_info(&self) -> Result<MempoolInfo> {
        log::debug!("RPC getmempoolinfo -> {}", self.endpoint);
        let info = self.client.get_mempool_info()?;
        Ok(MempoolInfo::from(&info))
    }

    fn blockchain_info(&self) -> Result<BlockchainInfo> {
        log::debug!("RPC getblockchaininfo -> {}", self.endpoint);
        let info = self.client.get_blockchain_info()?;
        Ok(BlockchainInfo::from(&info))
    }

    fn uptime(&self) -> Result<u64> {
        log::debug!("RPC uptime -> {}", self.endpoint);
        Ok(self.client.uptime()?)
    }

    fn version(&self) -> Result<String> {
        log::debug!("RPC getnetworkinfo -> {}", self.endpoint);
        Ok(self.client.get_network_info()?.subversion)
    }
}
