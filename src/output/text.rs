//! Text output formatter for human-readable display
//!
//! This module provides:
//! - An aligned table of incompatible modules
//! - Current → suggested version, with the required Go version in red
//! - Copy-pasteable `go get` commands for every suggestion
//! - Quiet mode: only the commands, ready to pipe into a shell

use crate::domain::{CompatibilityReport, Incompatibility};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

const MODULE_HEADER: &str = "Module";
const VERSION_HEADER: &str = "Version (suggested)";
const GO_HEADER: &str = "Requires Go";
const NO_SUGGESTION: &str = "(none)";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Plain text of the version column
    fn version_cell(finding: &Incompatibility) -> String {
        format!(
            "{} => {}",
            finding.current_version,
            finding.suggested_version.as_deref().unwrap_or(NO_SUGGESTION)
        )
    }

    /// Colored version column, padded on plain width
    fn paint_version_cell(&self, finding: &Incompatibility, width: usize) -> String {
        let plain = Self::version_cell(finding);
        let padding = " ".repeat(width.saturating_sub(plain.chars().count()));
        if !self.color {
            return format!("{}{}", plain, padding);
        }

        let suggested = match &finding.suggested_version {
            Some(v) => v.green().bold().to_string(),
            None => NO_SUGGESTION.dimmed().to_string(),
        };
        format!(
            "{} {} {}{}",
            finding.current_version.dimmed(),
            "=>".dimmed(),
            suggested,
            padding
        )
    }

    /// Write the findings table
    fn format_table(
        &self,
        findings: &[Incompatibility],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let module_width = findings
            .iter()
            .map(|f| f.module.chars().count())
            .chain(std::iter::once(MODULE_HEADER.len()))
            .max()
            .unwrap_or(0);
        let version_width = findings
            .iter()
            .map(|f| Self::version_cell(f).chars().count())
            .chain(std::iter::once(VERSION_HEADER.len()))
            .max()
            .unwrap_or(0);

        let header = format!(
            "  {:mw$}  {:vw$}  {}",
            MODULE_HEADER,
            VERSION_HEADER,
            GO_HEADER,
            mw = module_width,
            vw = version_width
        );
        if self.color {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for finding in findings {
            let required = format!("v{}", finding.required_go);
            let required = if self.color {
                required.red().to_string()
            } else {
                required
            };
            writeln!(
                writer,
                "  {:mw$}  {}  {}",
                finding.module,
                self.paint_version_cell(finding, version_width),
                required,
                mw = module_width
            )?;
        }

        Ok(())
    }

    /// Write the quiet report: fix commands, and a shell comment for every
    /// finding without one
    fn format_quiet(
        &self,
        report: &CompatibilityReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for finding in &report.findings {
            match finding.fix_command() {
                Some(command) => writeln!(writer, "{}", command)?,
                None => writeln!(
                    writer,
                    "# {} requires Go {}, no compatible version",
                    finding.module, finding.required_go
                )?,
            }
        }
        Ok(())
    }

    /// Write the fix commands section
    fn format_fixes(
        &self,
        report: &CompatibilityReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let commands = report.fix_commands();
        writeln!(writer)?;

        if commands.is_empty() {
            writeln!(writer, "No compatible older versions found.")?;
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}", "Suggested fixes:".bold())?;
        } else {
            writeln!(writer, "Suggested fixes:")?;
        }
        for command in commands {
            writeln!(writer, "{}", command)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CompatibilityReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return self.format_quiet(report, writer);
        }

        if report.is_compatible() {
            let message = format!("All dependencies are compatible with Go {}", report.target);
            if self.color {
                writeln!(writer, "{}", message.green())?;
            } else {
                writeln!(writer, "{}", message)?;
            }
        } else {
            self.format_table(&report.findings, writer)?;
            self.format_fixes(report, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            writeln!(
                writer,
                "Checked {} modules ({} skipped), {} incompatible",
                report.checked,
                report.skipped,
                report.findings.len()
            )?;
        }

        Ok(())
    }
}
