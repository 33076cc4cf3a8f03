//! Definition lists
//!
//!     Term                  **Term**
//!     : First meaning   →
//!     : Second meaning      - First meaning
//!                           - Second meaning

use super::classify_lines;
use once_cell::sync::Lazy;
use regex::Regex;

static DEFINITION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}:[ \t]+(.*?)\s*$").expect("definition pattern is valid"));

pub fn rewrite(source: &str) -> String {
    let lines = classify_lines(source);
    let mut out = String::with_capacity(source.len());
    let mut index = 0;

    while index < lines.len() {
        let (line, fenced) = lines[index];
        if fenced || !starts_term(&lines, index) {
            out.push_str(line);
            index += 1;
            continue;
        }

        let mut definitions = Vec::new();
        let mut next = index + 1;
        while let Some((candidate, false)) = lines.get(next) {
            let Some(captures) = DEFINITION_LINE.captures(candidate) else {
                break;
            };
            definitions.push(captures[1].to_string());
            next += 1;
        }

        out.push_str(&format!("**{}**\n\n", line.trim()));
        for definition in &definitions {
            out.push_str(&format!("- {definition}\n"));
        }
        out.push('\n');
        index = next;
    }

    out
}

/// A term is a non-blank line after a blank line (or at the start) followed by a definition line
fn starts_term(lines: &[(&str, bool)], index: usize) -> bool {
    let (line, _) = lines[index];
    let after_blank = index == 0 || lines[index - 1].0.trim().is_empty();
    let followed_by_definition = matches!(
        lines.get(index + 1),
        Some((next, false)) if DEFINITION_LINE.is_match(next)
    );
    after_blank
        && followed_by_definition
        && !line.trim().is_empty()
        && !DEFINITION_LINE.is_match(line)
}
