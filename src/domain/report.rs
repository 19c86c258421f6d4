//! Compatibility report types
//!
//! Provides the findings collected during a check run and the fix commands
//! derived from them.

use serde::{Deserialize, Serialize};

/// A module that requires a newer Go than the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incompatibility {
    /// Module path
    pub module: String,
    /// Version currently in the build list
    pub current_version: String,
    /// Newest version that builds with the target, if any
    pub suggested_version: Option<String>,
    /// Go version the current version requires
    pub required_go: String,
}

impl Incompatibility {
    /// Creates a new Incompatibility
    pub fn new(
        module: impl Into<String>,
        current_version: impl Into<String>,
        suggested_version: Option<String>,
        required_go: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            current_version: current_version.into(),
            suggested_version,
            required_go: required_go.into(),
        }
    }

    /// The `go get` command pinning the suggested version
    pub fn fix_command(&self) -> Option<String> {
        self.suggested_version
            .as_ref()
            .map(|v| format!("go get {}@{}", self.module, v))
    }
}

/// Result of checking a build list against a target Go version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Target Go version
    pub target: String,
    /// Number of modules checked
    pub checked: usize,
    /// Number of modules skipped by filters or without a version
    pub skipped: usize,
    /// Incompatible modules in build list order
    pub findings: Vec<Incompatibility>,
}

impl CompatibilityReport {
    /// Creates an empty report for a target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            checked: 0,
            skipped: 0,
            findings: Vec::new(),
        }
    }

    /// Adds a finding
    pub fn add_finding(&mut self, finding: Incompatibility) {
        self.findings.push(finding);
    }

    /// Returns true if no module needs a newer Go
    pub fn is_compatible(&self) -> bool {
        self.findings.is_empty()
    }

    /// Fix commands for every finding that has a suggestion
    pub fn fix_commands(&self) -> Vec<String> {
        self.findings
            .iter()
            .filter_map(Incompatibility::fix_command)
            .collect()
    }
}
