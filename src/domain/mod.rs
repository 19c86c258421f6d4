//! Core domain models for modcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Module records from the Go build list
//! - Go version parsing and the version ordering
//! - Module version ordering for published releases
//! - Compatibility findings and the report built from them

mod go_version;
mod module;
mod module_version;
mod report;

pub use go_version::{compare_go_versions, GoVersion};
pub use module::ModuleRecord;
pub use module_version::{compare_module_versions, parse_module_version};
pub use report::{CompatibilityReport, Incompatibility};
