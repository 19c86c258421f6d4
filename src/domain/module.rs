//! Module records from the Go build list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of `go list -m -json all`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModuleRecord {
    /// Module path
    pub path: String,
    /// Resolved version (empty for the main module)
    pub version: String,
    /// Time the version was published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Local directory holding the module source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Path of the module's cached go.mod file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_mod: Option<String>,
    /// Go version declared by the module's `go` directive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_version: Option<String>,
    /// Whether this is the main module
    pub main: bool,
    /// Whether the module is only an indirect dependency
    pub indirect: bool,
    /// Checksum of the module zip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<String>,
    /// Checksum of the go.mod file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_mod_sum: Option<String>,
}

impl ModuleRecord {
    /// Creates a record with a path and version
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the declared Go version (builder pattern)
    pub fn with_go_version(mut self, go_version: impl Into<String>) -> Self {
        self.go_version = Some(go_version.into());
        self
    }

    /// Declared Go version, ignoring blank values
    pub fn declared_go_version(&self) -> Option<&str> {
        self.go_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Returns true if this record names a downloadable dependency version.
    /// The main module has no version and nothing to download.
    pub fn is_checkable(&self) -> bool {
        !self.main && !self.path.is_empty() && !self.version.trim().is_empty()
    }
}

impl fmt::Display for ModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}@{}", self.path, self.version)
        }
    }
}
