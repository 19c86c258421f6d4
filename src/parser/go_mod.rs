//! go.mod `go` directive extraction

/// Find the Go version declared by the `go` directive of a go.mod file.
///
/// Returns None when the file has no directive or the directive is empty.
pub fn parse_go_directive(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("go ").or_else(|| line.strip_prefix("go\t")) else {
            continue;
        };

        let value = match rest.find("//") {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        let value = value.trim();

        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}
