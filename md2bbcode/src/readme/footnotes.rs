//! Footnotes
//!
//! BBCode has no footnotes, but it has anchors. A reference `[^label]` becomes a superscript
//! jump link numbered in order of first use, and the definitions move to the end of the
//! document behind a rule:
//!
//!     Text[^note]               Text<sup><a href="#fn-note">1</a></sup>
//!                        →
//!     [^note]: The note.        ---
//!                               <a name="fn-note">1.</a> The note.
//!
//! Definitions nobody references are still listed, after the referenced ones. References to
//! labels with no definition stay literal.

use super::{classify_lines, map_prose};
use crate::common::escape::escape_attribute;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}\[\^([^\]\s]+)\]:[ \t]?(.*?)\s*$").expect("definition pattern is valid")
});
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\^([^\]\s]+)\]").expect("reference pattern is valid"));

struct Definition {
    label: String,
    text: String,
}

pub fn rewrite(source: &str) -> String {
    let lines = classify_lines(source);
    let mut body = Vec::with_capacity(lines.len());
    let mut definitions: Vec<Definition> = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let (line, fenced) = lines[index];
        let captures = if fenced {
            None
        } else {
            DEFINITION.captures(line)
        };
        let Some(captures) = captures else {
            body.push((line, fenced));
            index += 1;
            continue;
        };

        let label = captures[1].to_string();
        let mut text = captures[2].to_string();
        index += 1;
        while let Some((next, false)) = lines.get(index) {
            if !is_continuation(next) {
                break;
            }
            text.push(' ');
            text.push_str(next.trim());
            index += 1;
        }

        if definitions.iter().all(|definition| definition.label != label) {
            definitions.push(Definition { label, text });
        }
    }

    if definitions.is_empty() {
        return source.to_string();
    }

    let mut order: Vec<String> = Vec::new();
    let mut out = String::with_capacity(source.len());
    for (line, fenced) in body {
        if fenced {
            out.push_str(line);
            continue;
        }
        let rewritten = map_prose(line, |prose| {
            REFERENCE
                .replace_all(prose, |caps: &Captures| {
                    let label = &caps[1];
                    if definitions.iter().all(|definition| definition.label != label) {
                        return caps[0].to_string();
                    }
                    let number = match order.iter().position(|seen| seen == label) {
                        Some(position) => position + 1,
                        None => {
                            order.push(label.to_string());
                            order.len()
                        }
                    };
                    format!(
                        "<sup><a href=\"#fn-{}\">{number}</a></sup>",
                        escape_attribute(label)
                    )
                })
                .into_owned()
        });
        out.push_str(&rewritten);
    }

    let referenced = order
        .iter()
        .filter_map(|label| definitions.iter().find(|definition| &definition.label == label));
    let unreferenced = definitions
        .iter()
        .filter(|definition| !order.contains(&definition.label));

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\n---\n\n");
    for (position, definition) in referenced.chain(unreferenced).enumerate() {
        out.push_str(&format!(
            "<a name=\"fn-{}\">{}.</a> {}\n\n",
            escape_attribute(&definition.label),
            position + 1,
            definition.text
        ));
    }

    tracing::debug!(footnotes = definitions.len(), "rewrote footnotes");
    out
}

fn is_continuation(line: &str) -> bool {
    (line.starts_with("    ") || line.starts_with('\t')) && !line.trim().is_empty()
}
