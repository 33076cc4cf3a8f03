//! Abbreviations and highlights
//!
//! `*[HTML]: HyperText Markup Language` lines are removed, and every whole-word `HTML` in prose
//! becomes `<abbr title="HyperText Markup Language">HTML</abbr>`. `==text==` becomes
//! `<mark>text</mark>`. Both leave HTML tags and link destinations alone.

use super::{classify_lines, map_prose};
use crate::common::escape::escape_attribute;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static ABBREVIATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}\*\[([^\]]+)\]:[ \t]*(.*?)\s*$").expect("abbreviation pattern is valid")
});
static HIGHLIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"==([^=\s](?:[^=]*[^=\s])?)==").expect("highlight pattern is valid")
});
/// HTML tags and `](destination)` parts of links
static PROTECTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>|\]\([^)]*\)").expect("protected pattern is valid"));

/// Abbreviations collected from a document
#[derive(Debug, Default)]
pub struct Abbreviations {
    pattern: Option<Regex>,
    expansions: HashMap<String, String>,
}

impl Abbreviations {
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    fn from_definitions(expansions: HashMap<String, String>) -> Self {
        let mut names: Vec<&String> = expansions.keys().collect();
        // longest first so `HTML5` wins over `HTML`
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternatives: Vec<String> = names.iter().map(|name| bounded(name)).collect();

        let pattern = if alternatives.is_empty() {
            None
        } else {
            match Regex::new(&alternatives.join("|")) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    tracing::warn!(%err, "ignoring abbreviations");
                    None
                }
            }
        };
        Abbreviations {
            pattern,
            expansions,
        }
    }

    fn apply(&self, prose: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return prose.to_string();
        };
        pattern
            .replace_all(prose, |caps: &Captures| {
                let name = &caps[0];
                match self.expansions.get(name) {
                    Some(title) => {
                        format!("<abbr title=\"{}\">{name}</abbr>", escape_attribute(title))
                    }
                    None => name.to_string(),
                }
            })
            .into_owned()
    }
}

fn bounded(name: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let mut alternative = String::new();
    if is_word(name.chars().next()) {
        alternative.push_str(r"\b");
    }
    alternative.push_str(&regex::escape(name));
    if is_word(name.chars().last()) {
        alternative.push_str(r"\b");
    }
    alternative
}

/// Removes abbreviation definition lines and returns what they defined
pub fn extract_abbreviations(source: &str) -> (String, Abbreviations) {
    let mut out = String::with_capacity(source.len());
    let mut expansions = HashMap::new();

    for (line, fenced) in classify_lines(source) {
        match ABBREVIATION.captures(line).filter(|_| !fenced) {
            Some(captures) => {
                expansions
                    .entry(captures[1].trim().to_string())
                    .or_insert_with(|| captures[2].to_string());
            }
            None => out.push_str(line),
        }
    }

    if expansions.is_empty() {
        return (out, Abbreviations::default());
    }
    (out, Abbreviations::from_definitions(expansions))
}

/// Rewrites highlights and abbreviations in prose
pub fn rewrite_spans(source: &str, abbreviations: &Abbreviations) -> String {
    let mut out = String::with_capacity(source.len());
    for (line, fenced) in classify_lines(source) {
        if fenced {
            out.push_str(line);
            continue;
        }
        out.push_str(&map_prose(line, |prose| {
            outside_protected(prose, |text| {
                let text = HIGHLIGHT.replace_all(text, "<mark>$1</mark>");
                abbreviations.apply(&text)
            })
        }));
    }
    out
}

fn outside_protected(prose: &str, rewrite: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(prose.len());
    let mut last = 0;
    for protected in PROTECTED.find_iter(prose) {
        out.push_str(&rewrite(&prose[last..protected.start()]));
        out.push_str(protected.as_str());
        last = protected.end();
    }
    out.push_str(&rewrite(&prose[last..]));
    out
}
