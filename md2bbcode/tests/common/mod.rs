//! Shared helpers for the integration tests

use md2bbcode::{process_readme, ConvertOptions};
use std::fs;
use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

/// Full README conversion with default options
pub fn readme(source: &str) -> String {
    process_readme(source, &ConvertOptions::default()).unwrap()
}

pub fn readme_with(source: &str, options: &ConvertOptions) -> String {
    process_readme(source, options).unwrap()
}
