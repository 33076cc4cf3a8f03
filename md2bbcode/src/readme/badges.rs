//! Badge region stripping
//!
//! Tools like all-contributors fence generated badge rows with comments:
//!
//!     <!-- ALL-CONTRIBUTORS-BADGE:START - Do not remove or modify this section -->
//!     [![All Contributors](https://img.shields.io/badge/...)](#contributors)
//!     <!-- ALL-CONTRIBUTORS-BADGE:END -->
//!
//! Those rows are noise on a forum, so the whole region goes. A start marker without a matching
//! end marker is left alone.

use super::classify_lines;
use once_cell::sync::Lazy;
use regex::Regex;

static BADGE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*<!--\s*[\w-]*badges?[\w-]*:start\b.*-->\s*$")
        .expect("badge start pattern is valid")
});
static BADGE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*<!--\s*[\w-]*badges?[\w-]*:end\b.*-->\s*$")
        .expect("badge end pattern is valid")
});

pub fn strip_badge_regions(source: &str) -> String {
    let lines = classify_lines(source);
    let mut out = String::with_capacity(source.len());
    let mut index = 0;

    while index < lines.len() {
        let (line, fenced) = lines[index];
        if !fenced && BADGE_START.is_match(line) {
            let end = lines[index + 1..]
                .iter()
                .position(|(line, fenced)| !fenced && BADGE_END.is_match(line));
            if let Some(offset) = end {
                tracing::debug!(lines = offset + 2, "stripped badge region");
                index += offset + 2;
                continue;
            }
        }
        out.push_str(line);
        index += 1;
    }

    out
}
