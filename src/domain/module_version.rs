//! Module version ordering
//!
//! Module versions are semantic versions with a mandatory `v` prefix, as
//! published on a module proxy: `v1.2.3`, `v1.2.0-pre`, `v0.0.0-20230101-abcdef`,
//! `v20.10.0+incompatible`. Build metadata does not affect precedence.

use semver::{BuildMetadata, Version};
use std::cmp::Ordering;

/// Parse a module version, dropping build metadata
pub fn parse_module_version(input: &str) -> Option<Version> {
    let mut version = Version::parse(input.trim().strip_prefix('v')?).ok()?;
    version.build = BuildMetadata::EMPTY;
    Some(version)
}

/// Compare two module versions by semver precedence.
///
/// Unparseable versions sort below every valid version and compare equal to
/// each other.
pub fn compare_module_versions(a: &str, b: &str) -> Ordering {
    match (parse_module_version(a), parse_module_version(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
