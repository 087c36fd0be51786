//! Shared helpers

pub mod encoding;

/// Split a list given as `a,b;c` into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
