//! README preprocessing
//!
//!     GitHub renders a few README conventions that CommonMark (and so comrak with our extension
//!     set) does not know about. They are rewritten into constructs the renderer already handles
//!     before the source is parsed:
//!
//!     - badges.rs: `<!-- ...BADGE...:START -->` / `:END -->` regions are dropped
//!     - footnotes.rs: `[^label]` references and definitions become anchors
//!     - deflists.rs: `term` + `: definition` lines become a bold term and a bullet list
//!     - inline.rs: `*[ABBR]: expansion` becomes `<abbr>`, `==text==` becomes `<mark>`
//!
//!     GitHub alerts (`> [!TIP]`) are handled after parsing, on the token tree (alerts.rs).
//!
//!     None of the text rewrites touch fenced code blocks or inline code spans.

pub mod alerts;
pub mod badges;
pub mod deflists;
pub mod footnotes;
pub mod inline;

pub use alerts::collapse_alerts;

/// Rewrites README conventions into plain Markdown/HTML.
pub fn preprocess(source: &str) -> String {
    let source = badges::strip_badge_regions(source);
    let (source, abbreviations) = inline::extract_abbreviations(&source);
    let source = footnotes::rewrite(&source);
    let source = deflists::rewrite(&source);
    inline::rewrite_spans(&source, &abbreviations)
}

/// Tracks whether lines are inside a fenced code block
#[derive(Debug, Default)]
struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    /// True when `line` belongs to a fenced block, fence lines included
    fn feed(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start_matches(' ');
        let fence = if line.len() - trimmed.len() <= 3 {
            fence_marker(trimmed)
        } else {
            None
        };

        match (self.open, fence) {
            (None, Some(marker)) => {
                self.open = Some(marker);
                true
            }
            (Some((open_marker, open_len)), Some((marker, len)))
                if marker == open_marker
                    && len >= open_len
                    && trimmed.trim_end().chars().all(|c| c == marker) =>
            {
                self.open = None;
                true
            }
            (Some(_), _) => true,
            (None, None) => false,
        }
    }
}

fn fence_marker(line: &str) -> Option<(char, usize)> {
    let marker = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = line.chars().take_while(|c| *c == marker).count();
    if len < 3 || (marker == '`' && line[len..].contains('`')) {
        return None;
    }
    Some((marker, len))
}

/// Lines of `source` (terminators kept), each flagged when it sits in a fenced code block
fn classify_lines(source: &str) -> Vec<(&str, bool)> {
    let mut fences = FenceTracker::default();
    source
        .split_inclusive('\n')
        .map(|line| (line, fences.feed(line)))
        .collect()
}

/// Applies `rewrite` to the parts of `line` outside inline code spans
fn map_prose(line: &str, mut rewrite: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find('`') {
        let run = rest[start..].bytes().take_while(|b| *b == b'`').count();
        let after = &rest[start + run..];
        match closing_run(after, run) {
            Some(close) => {
                let end = start + run + close + run;
                out.push_str(&rewrite(&rest[..start]));
                out.push_str(&rest[start..end]);
                rest = &rest[end..];
            }
            None => {
                out.push_str(&rewrite(&rest[..start + run]));
                rest = after;
            }
        }
    }

    out.push_str(&rewrite(rest));
    out
}

/// Byte offset of the first backtick run of exactly `run` backticks
fn closing_run(text: &str, run: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] != b'`' {
            index += 1;
            continue;
        }
        let start = index;
        while index < bytes.len() && bytes[index] == b'`' {
            index += 1;
        }
        if index - start == run {
            return Some(start);
        }
    }
    None
}
