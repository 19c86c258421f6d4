//! Decoders for `go list` and `go mod download` output
//!
//! - `go list -m -json all`: a stream of concatenated JSON objects
//! - `go list -m -versions <path>`: `<path> v1.0.0 v1.1.0 ...`
//! - `go mod download -json <path>@<version>`: one JSON object

use crate::domain::ModuleRecord;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of decoding a module stream
#[derive(Debug, Default)]
pub struct ModuleStream {
    /// Records that decoded successfully, in stream order
    pub modules: Vec<ModuleRecord>,
    /// Number of objects that could not be decoded into a record
    pub skipped: usize,
    /// Syntax error that ended the stream early
    pub error: Option<String>,
}

/// Decode the concatenated JSON objects printed by `go list -m -json`.
///
/// Objects with the wrong shape are counted and skipped. A syntax error stops
/// decoding; whatever was decoded before it is kept.
pub fn parse_module_stream(output: &[u8]) -> ModuleStream {
    let mut stream = ModuleStream::default();

    for value in serde_json::Deserializer::from_slice(output).into_iter::<Value>() {
        let value = match value {
            Ok(v) => v,
            Err(e) => {
                stream.error = Some(e.to_string());
                break;
            }
        };

        match serde_json::from_value::<ModuleRecord>(value) {
            Ok(record) => stream.modules.push(record),
            Err(e) => {
                tracing::debug!("skipping undecodable module record: {}", e);
                stream.skipped += 1;
            }
        }
    }

    stream
}

/// Parse `go list -m -versions` output into the list of versions.
///
/// The first token is the module path and is discarded; the remaining tokens
/// are versions in ascending order.
pub fn parse_version_list(output: &str) -> Vec<String> {
    output
        .split_whitespace()
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// Result of `go mod download -json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DownloadResult {
    /// Module path
    pub path: String,
    /// Downloaded version
    pub version: String,
    /// Location of the cached go.mod file
    pub go_mod: Option<String>,
    /// Error reported by the go command
    pub error: Option<String>,
}

/// Parse the JSON printed by `go mod download -json`
pub fn parse_download_result(output: &[u8]) -> Result<DownloadResult, String> {
    serde_json::from_slice(output).map_err(|e| e.to_string())
}
