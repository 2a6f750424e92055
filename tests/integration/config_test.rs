use brpcli::core::config::{
    RpcConfig, DEFAULT_RPC_HOST, ENV_DATADIR, ENV_RPC_HOST, ENV_RPC_PASSWORD, ENV_RPC_PORT,
    ENV_RPC_USER,
};
use bitcoincore_rpc::Auth;
use brpcli::{BitcoinRpc, BrpcError};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn lookup(vars: &[(&'static str, String)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<&'static str, String> = vars.iter().cloned().collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_config_from_bitcoin_conf() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bitcoin.conf"),
        "server=1\nrpcuser=alice\nrpcpassword=hunter2\nrpcport=18443\n",
    )
    .unwrap();

    let config = RpcConfig::resolve(lookup(&[]), Some(temp_dir.path().to_path_buf())).unwrap();

    assert_eq!(config.host, DEFAULT_RPC_HOST);
    assert_eq!(config.port, 18443);
    assert_eq!(
        config.auth,
        Auth::UserPass("alice".to_string(), "hunter2".to_string())
    );
}

#[test]
fn test_environment_overrides_conf() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bitcoin.conf"),
        "rpcuser=alice\nrpcpassword=hunter2\nrpcport=18443\n",
    )
    .unwrap();

    let env = lookup(&[
        (ENV_RPC_HOST, "10.0.0.5".to_string()),
        (ENV_RPC_PORT, "8332".to_string()),
        (ENV_RPC_USER, "bob".to_string()),
        (ENV_RPC_PASSWORD, "correct-horse".to_string()),
    ]);
    let config = RpcConfig::resolve(env, Some(temp_dir.path().to_path_buf())).unwrap();

    assert_eq!(config.host, "10.0.0.5");
    assert_eq!(config.port, 8332);
    assert_eq!(
        config.auth,
        Auth::UserPass("bob".to_string(), "correct-horse".to_string())
    );
    assert_eq!(config.endpoint().unwrap().as_str(), "http://10.0.0.5:8332/");
}

#[test]
fn test_cookie_fallback() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".cookie"), "__cookie__:abcdef0123\n").unwrap();

    let env = lookup(&[(ENV_DATADIR, temp_dir.path().to_string_lossy().to_string())]);
    let config = RpcConfig::resolve(env, None).unwrap();

    assert_eq!(config.auth, Auth::CookieFile(temp_dir.path().join(".cookie")));
    assert!(BitcoinRpc::from_config(&config).is_ok());
}

#[test]
fn test_conf_in_other_network_section_falls_back_to_cookie() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bitcoin.conf"),
        "[regtest]\nrpcuser=alice\nrpcpassword=hunter2\n",
    )
    .unwrap();

    let config = RpcConfig::resolve(lookup(&[]), Some(temp_dir.path().to_path_buf())).unwrap();
    assert_eq!(config.auth, Auth::CookieFile(temp_dir.path().join(".cookie")));
}

#[test]
fn test_malformed_cookie() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".cookie"), "no-separator").unwrap();

    let config = RpcConfig::resolve(lookup(&[]), Some(temp_dir.path().to_path_buf())).unwrap();
    let err = BitcoinRpc::from_config(&config).err().unwrap();
    assert!(matches!(err, BrpcError::Rpc(_)));
}
