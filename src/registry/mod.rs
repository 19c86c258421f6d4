//! Registry backends for go.mod files and version lists
//!
//! This module provides:
//! - The `ModuleRegistry` trait used by the compatibility checker
//! - HTTP client shared foundation with retry logic
//! - Go Module Proxy backend
//!
//! The `go` command backend lives in `crate::toolchain`.

mod client;
mod go_proxy;

pub use client::HttpClient;
pub use go_proxy::{proxy_base_url, GoProxyRegistry, DEFAULT_PROXY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Source of module metadata for specific versions
#[async_trait]
pub trait ModuleRegistry: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the go.mod file of an exact module version
    async fn fetch_go_mod(&self, module: &str, version: &str) -> Result<String, RegistryError>;

    /// Fetch all published versions of a module in ascending order
    async fn list_versions(&self, module: &str) -> Result<Vec<String>, RegistryError>;
}
