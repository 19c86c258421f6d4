//! CLI argument parsing module for modcheck

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Where go.mod files and version lists are fetched from
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryKind {
    /// The local go command (`go mod download`, `go list -m -versions`)
    #[default]
    Go,
    /// A GOPROXY-protocol server over HTTP
    Proxy,
}

/// Go module compatibility checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modcheck",
    version,
    about = "Find Go module dependencies that require a newer Go than your target"
)]
pub struct CliArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Target Go version, e.g. 1.20 or 1.21.5
    #[arg(long = "go", value_name = "VERSION", env = "MODCHECK_GO_VERSION")]
    pub go_version: Option<String>,

    // General options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Module filters
    /// Exclude specific modules from the check (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Check only specific modules (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // Lookup options
    /// Where go.mod files and version lists come from
    #[arg(long, value_enum, default_value_t = RegistryKind::Go)]
    pub registry: RegistryKind,

    /// Module proxy used with --registry proxy
    #[arg(long, value_name = "URL", env = "GOPROXY")]
    pub proxy_url: Option<String>,

    /// go executable to run
    #[arg(long, value_name = "PATH", env = "MODCHECK_GO_BIN", default_value = "go")]
    pub go_bin: PathBuf,

    /// Number of modules checked concurrently
    #[arg(short, long, default_value_t = 4)]
    pub jobs: usize,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Returns true if progress bars and banners should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
