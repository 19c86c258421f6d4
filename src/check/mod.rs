//! Compatibility judgment for build list modules
//!
//! This module provides:
//! - Module filter configuration from CLI args
//! - The `go` directive resolver (lookup failures become "no requirement")
//! - The compatibility test against the target Go version
//! - The newest-first search for a compatible older release

mod filter;

pub use filter::ModuleFilter;

use crate::domain::{compare_go_versions, GoVersion, Incompatibility, ModuleRecord};
use crate::parser::parse_go_directive;
use crate::registry::ModuleRegistry;
use std::cmp::Ordering;
use std::sync::Arc;

/// Returns true if a module requiring `required` cannot be built with `target`.
///
/// A missing requirement never conflicts, and an exact match is compatible.
pub fn is_incompatible(target: &GoVersion, required: Option<&str>) -> bool {
    match required {
        Some(required) => compare_go_versions(target.as_str(), required) == Ordering::Less,
        None => false,
    }
}

/// Checks modules against a target Go version
#[derive(Clone)]
pub struct CompatibilityChecker {
    /// Target Go version
    target: GoVersion,
    /// Where go.mod files and version lists come from
    registry: Arc<dyn ModuleRegistry>,
}

impl CompatibilityChecker {
    /// Create a new checker for the given target
    pub fn new(target: GoVersion, registry: Arc<dyn ModuleRegistry>) -> Self {
        Self { target, registry }
    }

    /// The target Go version
    pub fn target(&self) -> &GoVersion {
        &self.target
    }

    /// Resolve the `go` directive of an exact module version.
    ///
    /// Download, read and parse failures all yield None; they are logged and
    /// treated as "no requirement".
    pub async fn required_go_version(&self, module: &str, version: &str) -> Option<String> {
        match self.registry.fetch_go_mod(module, version).await {
            Ok(content) => {
                let required = parse_go_directive(&content);
                if required.is_none() {
                    tracing::debug!("{}@{}: go.mod has no go directive", module, version);
                }
                required
            }
            Err(e) => {
                tracing::debug!("{}@{}: go.mod lookup failed: {}", module, version, e);
                None
            }
        }
    }

    /// The Go version a build list entry requires: the declared one, or the
    /// one found in its go.mod
    pub async fn effective_requirement(&self, record: &ModuleRecord) -> Option<String> {
        match record.declared_go_version() {
            Some(declared) => Some(declared.to_string()),
            None => self.required_go_version(&record.path, &record.version).await,
        }
    }

    /// Find the newest published version of a module that builds with the target.
    ///
    /// Versions are scanned newest to oldest; the first one whose requirement
    /// is missing or at most the target wins. Returns None when the version
    /// list is empty or cannot be fetched.
    pub async fn find_compatible_version(&self, module: &str) -> Option<String> {
        let versions = match self.registry.list_versions(module).await {
            Ok(versions) => versions,
            Err(e) => {
                tracing::debug!("{}: version list failed: {}", module, e);
                return None;
            }
        };

        for version in versions.iter().rev() {
            let required = self.required_go_version(module, version).await;
            if !is_incompatible(&self.target, required.as_deref()) {
                return Some(version.clone());
            }
        }

        tracing::debug!("{}: no version builds with Go {}", module, self.target);
        None
    }

    /// Check one build list entry, returning a finding if it needs a newer Go
    pub async fn check(&self, record: &ModuleRecord) -> Option<Incompatibility> {
        let required = self.effective_requirement(record).await?;
        if !is_incompatible(&self.target, Some(&required)) {
            return None;
        }

        tracing::info!("{} requires Go {}", record, required);
        let suggested = self.find_compatible_version(&record.path).await;

        Some(Incompatibility::new(
            &record.path,
            &record.version,
            suggested,
            required,
        ))
    }
}
