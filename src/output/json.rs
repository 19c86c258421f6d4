//! JSON output formatter for machine processing

use crate::domain::{CompatibilityReport, Incompatibility};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Target Go version
    target: &'a str,
    /// Number of modules checked
    checked: usize,
    /// Number of modules skipped
    skipped: usize,
    /// Whether every module builds with the target
    compatible: bool,
    /// Incompatible modules
    findings: &'a [Incompatibility],
    /// `go get` commands for every suggestion
    fixes: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CompatibilityReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            target: &report.target,
            checked: report.checked,
            skipped: report.skipped,
            compatible: report.is_compatible(),
            findings: &report.findings,
            fixes: report.fix_commands(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
