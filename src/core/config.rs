use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use bitcoincore_rpc::Auth;
use url::Url;

use crate::error::{BrpcError, Result};

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 8332;

pub const ENV_RPC_HOST: &str = "BITCOIN_RPC_HOST";
pub const ENV_RPC_PORT: &str = "BITCOIN_RPC_PORT";
pub const ENV_RPC_USER: &str = "BITCOIN_RPC_USER";
pub const ENV_RPC_PASSWORD: &str = "BITCOIN_RPC_PASSWORD";
pub const ENV_DATADIR: &str = "BITCOIN_DATADIR";

const CONF_FILE: &str = "bitcoin.conf";
const COOKIE_FILE: &str = ".cookie";

/// Connection settings for the node, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub host: String,
    pub port: u16,
    pub auth: Auth,
}

impl RpcConfig {
    /// Resolve from the process environment and the default data directory
    pub fn load() -> Result<Self> {
        Self::resolve(|key| env::var(key).ok(), default_data_dir())
    }

    /// Resolve using `lookup` for environment variables.
    ///
    /// `data_dir` is used only when `BITCOIN_DATADIR` is not set.
    pub fn resolve<F>(lookup: F, data_dir: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_RPC_HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_HOST.to_string());

        let data_dir = lookup(ENV_DATADIR).map(PathBuf::from).or(data_dir);
        let conf = match &data_dir {
            Some(dir) => BitcoinConf::load(&dir.join(CONF_FILE))?,
            None => BitcoinConf::default(),
        };

        let port = match lookup(ENV_RPC_PORT).or_else(|| conf.get("rpcport").map(String::from)) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| BrpcError::config(format!("Invalid RPC port: '{}'", raw)))?,
            None => DEFAULT_RPC_PORT,
        };

        let auth = match (lookup(ENV_RPC_USER), lookup(ENV_RPC_PASSWORD)) {
            (Some(user), Some(password)) => {
                log::debug!("Using RPC credentials from environment");
                Auth::UserPass(user, password)
            }
            _ => match (conf.get("rpcuser"), conf.get("rpcpassword")) {
                (Some(user), Some(password)) => {
                    log::debug!("Using RPC credentials from {}", CONF_FILE);
                    Auth::UserPass(user.to_string(), password.to_string())
                }
                _ => {
                    let dir = data_dir.as_deref().ok_or_else(|| {
                        BrpcError::config("Could not determine bitcoin data directory")
                    })?;
                    log::debug!("Using RPC cookie from {:?}", dir);
                    Auth::CookieFile(dir.join(COOKIE_FILE))
                }
            },
        };

        Ok(Self { host, port, auth })
    }

    pub fn endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&format!("http://{}:{}/", self.host, self.port))?)
    }
}

/// Platform default data directory of Bitcoin Core
pub fn default_data_dir() -> Option<PathBuf> {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        dirs::data_dir().map(|dir| dir.join("Bitcoin"))
    } else {
        dirs::home_dir().map(|dir| dir.join(".bitcoin"))
    }
}

/// Key/value pairs from `bitcoin.conf`.
///
/// Only top-level and `[main]` keys are kept; other network sections are
/// ignored.
#[derive(Debug, Default)]
pub struct BitcoinConf {
    values: HashMap<String, String>,
}

impl BitcoinConf {
    /// Missing file yields an empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}", path);
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path).map_err(|e| {
            BrpcError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Ok(Self::parse(&data))
    }

    pub fn parse(data: &str) -> Self {
        let mut values = HashMap::new();
        let mut in_main = true;

        for line in data.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_main = section.trim() == "main";
                continue;
            }

            if !in_main {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
