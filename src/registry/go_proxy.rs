//! Go Module Proxy backend
//!
//! Fetches module metadata from a GOPROXY-protocol server.
//! API endpoints:
//! - List versions: {proxy}/{module}/@v/list
//! - go.mod file: {proxy}/{module}/@v/{version}.mod

use crate::domain::compare_module_versions;
use crate::error::RegistryError;
use crate::registry::{HttpClient, ModuleRegistry};
use async_trait::async_trait;

/// Go Module Proxy base URL
pub const DEFAULT_PROXY_URL: &str = "https://proxy.golang.org";

/// Pick the first http(s) proxy from a GOPROXY value.
///
/// GOPROXY is a list separated by `,` or `|` that may also contain `direct`
/// and `off`, which the proxy backend cannot use.
pub fn proxy_base_url(goproxy: &str) -> Option<String> {
    goproxy
        .split([',', '|'])
        .map(str::trim)
        .find(|entry| entry.starts_with("https://") || entry.starts_with("http://"))
        .map(|entry| entry.trim_end_matches('/').to_string())
}

/// Parse the body of `@v/list`: one version per line, in no particular order.
///
/// Returns the versions sorted oldest to newest by module semver precedence.
pub fn parse_proxy_version_list(body: &str) -> Vec<String> {
    let mut versions: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    versions.sort_by(|a, b| compare_module_versions(a, b));
    versions
}

/// Go Module Proxy backend
pub struct GoProxyRegistry {
    client: HttpClient,
    base_url: String,
}

impl GoProxyRegistry {
    /// Create a new proxy backend for the given base URL
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the URL for listing versions
    fn build_list_url(&self, module: &str) -> String {
        format!("{}/{}/@v/list", self.base_url, Self::escape(module))
    }

    /// Build the URL for a version's go.mod
    fn build_mod_url(&self, module: &str, version: &str) -> String {
        format!(
            "{}/{}/@v/{}.mod",
            self.base_url,
            Self::escape(module),
            Self::escape(version)
        )
    }

    /// Case-encode a module path or version: uppercase letters become !lowercase
    fn escape(value: &str) -> String {
        let mut encoded = String::with_capacity(value.len() + 4);
        for ch in value.chars() {
            if ch.is_uppercase() {
                encoded.push('!');
                for lower in ch.to_lowercase() {
                    encoded.push(lower);
                }
            } else {
                encoded.push(ch);
            }
        }
        encoded
    }
}

#[async_trait]
impl ModuleRegistry for GoProxyRegistry {
    fn registry_name(&self) -> &'static str {
        "Go Proxy"
    }

    async fn fetch_go_mod(&self, module: &str, version: &str) -> Result<String, RegistryError> {
        let url = self.build_mod_url(module, version);
        self.client
            .get_text(&url, module, self.registry_name())
            .await
    }

    async fn list_versions(&self, module: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.build_list_url(module);
        let body = self
            .client
            .get_text(&url, module, self.registry_name())
            .await?;
        Ok(parse_proxy_version_list(&body))
    }
}
