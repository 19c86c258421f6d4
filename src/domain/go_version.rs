//! Go version parsing and ordering
//!
//! Handles version formats found in go.mod `go` directives and on the CLI:
//! - Language version: `1.21`, `1`
//! - Release: `1.21.3`
//! - Prefixed: `go1.21.3`, `v1.21`
//! - Release candidate: `1.21rc1`, `1.22beta2`, `1.21.0-rc.1`

use regex::Regex;
use semver::{Prerelease, Version};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

// go1.21.3, v1.21, 1.21rc1, 1.21.0-rc.1
static GO_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:go|v)?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-?((?:alpha|beta|rc)\.?\d*))?$").unwrap()
});

/// A parsed Go version, keeping the text it was parsed from
#[derive(Debug, Clone)]
pub struct GoVersion {
    raw: String,
    version: Version,
}

impl GoVersion {
    /// Parse a Go version string, returning None if it is not recognised
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let caps = GO_VERSION_RE.captures(trimmed)?;

        let component = |idx: usize| -> Option<u64> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        let mut version = Version::new(component(1)?, component(2)?, component(3)?);
        if let Some(pre) = caps.get(4) {
            version.pre = Prerelease::new(pre.as_str()).ok()?;
        }

        Some(Self {
            raw: trimmed.to_string(),
            version,
        })
    }

    /// The text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalised semantic version
    pub fn semver(&self) -> &Version {
        &self.version
    }
}

impl PartialEq for GoVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for GoVersion {}

impl Ord for GoVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl PartialOrd for GoVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for GoVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Compare two version strings with Go/semver precedence.
///
/// Unparseable versions sort below every valid version and compare equal to
/// each other, so the ordering is total over arbitrary input.
pub fn compare_go_versions(a: &str, b: &str) -> Ordering {
    match (GoVersion::parse(a), GoVersion::parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
