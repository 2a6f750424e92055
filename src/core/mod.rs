// Core business logic module

pub mod config;
pub mod metrics;
pub mod rpc;
pub mod units;
pub mod uptime;

// Re-export commonly used items
pub use config::RpcConfig;
pub use metrics::{Metric, MetricReport};
pub use units::{convert_bytes, ConvertedValue, Unit};
pub use uptime::humanize_uptime;
