use colored::Colorize;
use std::io::{self, Write};

use crate::core::metrics::MetricReport;

/// Width of the row label column
pub const LABEL_WIDTH: usize = 15;
/// Width of the line under each section header
pub const SEPARATOR_WIDTH: usize = 30;

/// Uppercase the first character, lowercase the rest
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn format_row(label: &str, value: &str) -> String {
    format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)
}

/// Write a header, a separator and one line per row, then a blank line
pub fn write_report<W: Write>(out: &mut W, report: &MetricReport) -> io::Result<()> {
    writeln!(out, "{}", capitalize(report.label).bold().green())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for (label, value) in &report.rows {
        writeln!(out, "{}", format_row(label, value))?;
    }
    writeln!(out)
}
