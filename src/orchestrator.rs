//! Check orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: list → filter → resolve → judge → suggest
//! - Concurrent per-module checks with a bounded number of jobs
//! - Report order identical to build list order
//! - Fatal failure only when the build list cannot be listed

use crate::check::CompatibilityChecker;
use crate::cli::RegistryKind;
use crate::config::CheckConfig;
use crate::domain::{CompatibilityReport, ModuleRecord};
use crate::error::AppError;
use crate::progress::Progress;
use crate::registry::{GoProxyRegistry, HttpClient, ModuleRegistry};
use crate::toolchain::{GoToolchain, ModuleLister};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// Run configuration
    config: CheckConfig,
    /// Build list source
    lister: Arc<dyn ModuleLister>,
    /// go.mod and version list source
    registry: Arc<dyn ModuleRegistry>,
}

impl Orchestrator {
    /// Create a new orchestrator backed by the go command and, if configured,
    /// the module proxy
    pub fn new(config: CheckConfig) -> Result<Self, AppError> {
        let toolchain =
            Arc::new(GoToolchain::new(&config.work_dir).with_program(&config.go_bin));

        let registry: Arc<dyn ModuleRegistry> = match config.registry {
            RegistryKind::Go => Arc::clone(&toolchain) as Arc<dyn ModuleRegistry>,
            RegistryKind::Proxy => Arc::new(GoProxyRegistry::new(
                HttpClient::new()?,
                config.proxy_url.clone(),
            )),
        };

        Ok(Self {
            config,
            lister: toolchain,
            registry,
        })
    }

    /// Create an orchestrator with custom sources (for testing)
    pub fn with_sources(
        config: CheckConfig,
        lister: Arc<dyn ModuleLister>,
        registry: Arc<dyn ModuleRegistry>,
    ) -> Self {
        Self {
            config,
            lister,
            registry,
        }
    }

    /// Run the check workflow
    pub async fn run(&self) -> Result<CompatibilityReport, AppError> {
        self.run_with_progress(false).await
    }

    /// Run the check workflow with optional progress display
    pub async fn run_with_progress(
        &self,
        show_progress: bool,
    ) -> Result<CompatibilityReport, AppError> {
        let mut progress = Progress::new(show_progress);
        let mut report = CompatibilityReport::new(self.config.target.as_str());

        // Step 1: List the build list
        progress.spinner("Listing modules...");
        let listed = self.lister.list_modules().await;
        progress.finish_and_clear();
        let modules = listed?;
        tracing::info!("listed {} modules", modules.len());

        // Step 2: Apply filters
        let (to_check, skipped) = self.select(modules);
        report.skipped = skipped;
        report.checked = to_check.len();

        // Step 3: Check each module; results are collected in list order
        let checker = CompatibilityChecker::new(self.config.target.clone(), self.registry.clone());
        let semaphore = Arc::new(Semaphore::new(self.config.jobs.max(1)));

        let mut handles = Vec::with_capacity(to_check.len());
        for record in to_check {
            let checker = checker.clone();
            let semaphore = Arc::clone(&semaphore);
            let name = record.path.clone();
            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                checker.check(&record).await
            });
            handles.push((name, handle));
        }

        progress.start(handles.len() as u64, "Checking modules");
        for (name, handle) in handles {
            progress.set_message(&format!("Checking {}", name));
            match handle.await {
                Ok(Some(finding)) => report.add_finding(finding),
                Ok(None) => {}
                Err(e) => tracing::warn!("{}: check aborted: {}", name, e),
            }
            progress.inc();
        }
        progress.finish_and_clear();

        Ok(report)
    }

    /// Split the build list into modules to check and a count of skipped ones
    fn select(&self, modules: Vec<ModuleRecord>) -> (Vec<ModuleRecord>, usize) {
        let mut skipped = 0;
        let mut selected = Vec::with_capacity(modules.len());

        for record in modules {
            if record.main {
                continue;
            }
            if !record.is_checkable() {
                tracing::debug!("{}: no version, not checked", record.path);
                skipped += 1;
                continue;
            }
            if !self.config.filter.should_check(&record.path) {
                tracing::debug!("{}: filtered out", record.path);
                skipped += 1;
                continue;
            }
            selected.push(record);
        }

        (selected, skipped)
    }
}
