//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ToolchainError: the `go` command could not enumerate modules (fatal)
//! - RegistryError: a go.mod or version list lookup failed (absorbed per module)
//! - ConfigError: invalid CLI configuration (fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Go toolchain related errors
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    /// Module registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while running the `go` command
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// The go executable could not be found
    #[error("go executable not found: {program}")]
    NotFound { program: String },

    /// The command could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command exited with a non-zero status
    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command produced output that could not be decoded
    #[error("invalid output from '{command}': {message}")]
    InvalidOutput { command: String, message: String },
}

/// Errors related to go.mod and version list lookups
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Module or version not found in registry
    #[error("module '{module}' not found in {registry}")]
    ModuleNotFound { module: String, registry: String },

    /// Network request failed
    #[error("failed to fetch module '{module}' from {registry}: {message}")]
    NetworkError {
        module: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{module}': {message}")]
    InvalidResponse {
        module: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{module}' from {registry}")]
    Timeout { module: String, registry: String },

    /// Downloaded go.mod could not be read
    #[error("failed to read go.mod at {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The go command backing the registry failed
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Target Go version could not be parsed
    #[error("invalid Go version '{value}': expected a version like '1.21' or '1.21.3'")]
    InvalidGoVersion { value: String },

    /// Concurrency must be at least one
    #[error("invalid job count {value}: must be at least 1")]
    InvalidJobs { value: usize },

    /// No usable proxy URL in proxy mode
    #[error("invalid proxy setting '{value}': expected an http(s) URL")]
    InvalidProxy { value: String },
}

impl ToolchainError {
    /// Creates a new CommandFailed error
    pub fn command_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        ToolchainError::CommandFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(command: impl Into<String>, message: impl Into<String>) -> Self {
        ToolchainError::InvalidOutput {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new ModuleNotFound error
    pub fn module_not_found(module: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::ModuleNotFound {
            module: module.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        module: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            module: module.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        module: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            module: module.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(module: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            module: module.into(),
            registry: registry.into(),
        }
    }
}
