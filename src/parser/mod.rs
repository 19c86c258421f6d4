//! Decoders for Go toolchain output and go.mod files
//!
//! This module provides:
//! - Module stream decoding for `go list -m -json all`
//! - Version list decoding for `go list -m -versions`
//! - Download result decoding for `go mod download -json`
//! - `go` directive extraction from go.mod

mod go_list;
mod go_mod;

pub use go_list::{
    parse_download_result, parse_module_stream, parse_version_list, DownloadResult, ModuleStream,
};
pub use go_mod::parse_go_directive;
