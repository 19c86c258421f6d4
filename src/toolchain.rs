//! Go toolchain integration
//!
//! This module provides:
//! - Build list enumeration via `go list -m -json all`
//! - go.mod retrieval via `go mod download -json <module>@<version>`
//! - Version listing via `go list -m -versions <module>`

use crate::domain::ModuleRecord;
use crate::error::{RegistryError, ToolchainError};
use crate::parser::{parse_download_result, parse_module_stream, parse_version_list};
use crate::registry::ModuleRegistry;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;

/// Default go executable
pub const DEFAULT_GO_BIN: &str = "go";

/// Source of the project's module build list
#[async_trait]
pub trait ModuleLister: Send + Sync {
    /// List every module in the build list, main module included
    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ToolchainError>;
}

/// Runs the go command in a project directory
#[derive(Debug, Clone)]
pub struct GoToolchain {
    /// go executable to run
    program: PathBuf,
    /// Directory the commands run in
    work_dir: PathBuf,
}

impl GoToolchain {
    /// Create a toolchain running `go` in the given directory
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from(DEFAULT_GO_BIN),
            work_dir: work_dir.into(),
        }
    }

    /// Use a different go executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory the commands run in
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Render a command line for messages
    fn command_line(&self, args: &[&str]) -> String {
        let mut line = self.program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the go command and return its raw output, whatever the exit status
    async fn run_raw(&self, args: &[&str]) -> Result<Output, ToolchainError> {
        tracing::debug!("running {}", self.command_line(args));

        Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ToolchainError::NotFound {
                    program: self.program.display().to_string(),
                },
                _ => ToolchainError::Spawn {
                    command: self.command_line(args),
                    source: e,
                },
            })
    }

    /// Run the go command and return stdout, failing on a non-zero exit
    async fn run(&self, args: &[&str]) -> Result<Vec<u8>, ToolchainError> {
        let output = self.run_raw(args).await?;

        if !output.status.success() {
            return Err(ToolchainError::command_failed(
                self.command_line(args),
                output.status.to_string(),
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ModuleLister for GoToolchain {
    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ToolchainError> {
        let args = ["list", "-m", "-json", "all"];
        let stdout = self.run(&args).await?;
        let stream = parse_module_stream(&stdout);

        if let Some(error) = stream.error {
            if stream.modules.is_empty() {
                return Err(ToolchainError::invalid_output(self.command_line(&args), error));
            }
            tracing::warn!(
                "module list truncated after {} entries: {}",
                stream.modules.len(),
                error
            );
        }
        if stream.skipped > 0 {
            tracing::debug!("skipped {} undecodable module records", stream.skipped);
        }

        Ok(stream.modules)
    }
}

#[async_trait]
impl ModuleRegistry for GoToolchain {
    fn registry_name(&self) -> &'static str {
        "go command"
    }

    async fn fetch_go_mod(&self, module: &str, version: &str) -> Result<String, RegistryError> {
        let target = format!("{}@{}", module, version);
        let args = ["mod", "download", "-json", target.as_str()];

        // A failed download still prints JSON carrying the error
        let output = self.run_raw(&args).await?;
        let result = parse_download_result(&output.stdout).map_err(|e| {
            RegistryError::invalid_response(module, self.registry_name(), e)
        })?;

        if let Some(error) = result.error {
            return Err(RegistryError::invalid_response(
                module,
                self.registry_name(),
                error,
            ));
        }

        let go_mod = result.go_mod.ok_or_else(|| {
            RegistryError::invalid_response(module, self.registry_name(), "no GoMod path")
        })?;

        tokio::fs::read_to_string(&go_mod)
            .await
            .map_err(|e| RegistryError::ReadError {
                path: PathBuf::from(go_mod),
                source: e,
            })
    }

    async fn list_versions(&self, module: &str) -> Result<Vec<String>, RegistryError> {
        let stdout = self.run(&["list", "-m", "-versions", module]).await?;
        Ok(parse_version_list(&String::from_utf8_lossy(&stdout)))
    }
}
