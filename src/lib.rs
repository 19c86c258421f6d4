//! modcheck - Go module compatibility checker library
//!
//! This library checks every module in a Go build list against a target
//! Go version and suggests the newest release of each offending module that
//! still builds with that version:
//! - Enumerate modules (`go list -m -json all`)
//! - Resolve each module's `go` directive
//! - Flag modules requiring a newer Go than the target
//! - Search older releases for a compatible replacement

pub mod check;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod toolchain;
