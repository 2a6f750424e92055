// UI and formatting module

pub mod report;

// Re-export commonly used items for cleaner imports
pub use report::{capitalize, format_row, write_report};
