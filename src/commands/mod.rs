// Command handlers module
pub mod stats;
pub mod version;
