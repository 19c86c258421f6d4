//! Module filter configuration
//!
//! This module provides the ModuleFilter struct that decides which modules
//! of the build list are checked at all.

/// Filter configuration for module selection
#[derive(Debug, Clone, Default)]
pub struct ModuleFilter {
    /// Modules to leave out of the check
    pub exclude: Vec<String>,
    /// If non-empty, only check these modules
    pub only: Vec<String>,
}

impl ModuleFilter {
    /// Create a new ModuleFilter that checks everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set modules to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set modules to include (only list)
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Check if a module should be processed based on filters
    pub fn should_check(&self, module: &str) -> bool {
        // --only takes precedence over --exclude
        if !self.only.is_empty() {
            return self.only.iter().any(|m| m == module);
        }
        !self.exclude.iter().any(|m| m == module)
    }
}
