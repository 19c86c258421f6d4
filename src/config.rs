//! Validated run configuration
//!
//! `CheckConfig` is built once from the CLI and handed to every stage, so no
//! stage reads process-wide state.

use crate::check::ModuleFilter;
use crate::cli::{CliArgs, RegistryKind};
use crate::domain::GoVersion;
use crate::error::ConfigError;
use crate::registry::{proxy_base_url, DEFAULT_PROXY_URL};
use std::path::PathBuf;

/// Configuration for a single check run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Target Go version
    pub target: GoVersion,
    /// Project directory the go commands run in
    pub work_dir: PathBuf,
    /// go executable
    pub go_bin: PathBuf,
    /// Module selection
    pub filter: ModuleFilter,
    /// Where go.mod files and version lists come from
    pub registry: RegistryKind,
    /// Proxy base URL, used with `RegistryKind::Proxy`
    pub proxy_url: String,
    /// Number of modules checked concurrently
    pub jobs: usize,
}

impl CheckConfig {
    /// Create a configuration with defaults for everything but the target
    pub fn new(target: GoVersion) -> Self {
        Self {
            target,
            work_dir: PathBuf::from("."),
            go_bin: PathBuf::from("go"),
            filter: ModuleFilter::new(),
            registry: RegistryKind::Go,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            jobs: 4,
        }
    }

    /// Set the module filter
    pub fn with_filter(mut self, filter: ModuleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the concurrency
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Build and validate a configuration from CLI arguments and a target
    pub fn from_cli(args: &CliArgs, target: &str) -> Result<Self, ConfigError> {
        let target = GoVersion::parse(target).ok_or_else(|| ConfigError::InvalidGoVersion {
            value: target.to_string(),
        })?;

        if args.jobs == 0 {
            return Err(ConfigError::InvalidJobs { value: args.jobs });
        }

        let proxy_url = match (&args.proxy_url, args.registry) {
            (None, _) => DEFAULT_PROXY_URL.to_string(),
            (Some(raw), RegistryKind::Proxy) => {
                proxy_base_url(raw).ok_or_else(|| ConfigError::InvalidProxy { value: raw.clone() })?
            }
            // GOPROXY may be "direct" or "off" when the go command does the lookups
            (Some(raw), RegistryKind::Go) => {
                proxy_base_url(raw).unwrap_or_else(|| DEFAULT_PROXY_URL.to_string())
            }
        };

        let filter = ModuleFilter::new()
            .with_exclude(args.exclude.clone())
            .with_only(args.only.clone());

        Ok(Self {
            target,
            work_dir: args.path.clone(),
            go_bin: args.go_bin.clone(),
            filter,
            registry: args.registry,
            proxy_url,
            jobs: args.jobs,
        })
    }
}
