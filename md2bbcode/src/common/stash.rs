//! Placeholder stashing for plain BBCode regions.
//!
//! The HTML pass must never reinterpret what sits inside `[CODE]`, `[ICODE]`, `[IMG]` and the
//! other plain tags: `<font color="red">` inside inline code is text, not markup. Before the HTML
//! parse each plain region is swapped for `\x1A<index>\x1A` and swapped back afterwards.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Delimits stash placeholders
pub const SENTINEL: char = '\u{1A}';

static PLAIN_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[(code|icode|php|html|plain|media|img|user|attach)[^\]]*\]")
        .expect("plain tag pattern is valid")
});

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new("\x1A([0-9]+)\x1A").expect("placeholder pattern is valid"));

/// Append-only list of stashed spans, scoped to one conversion.
#[derive(Debug, Default)]
pub struct Stash {
    entries: Vec<String>,
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `original` and returns the placeholder that stands in for it.
    pub fn push(&mut self, original: &str) -> String {
        let placeholder = format!("{SENTINEL}{}{SENTINEL}", self.entries.len());
        self.entries.push(original.to_string());
        placeholder
    }

    /// Replaces every plain-tag region of `text` with a placeholder.
    ///
    /// A region runs from an opener (option allowed, any case) to the first closer with the same
    /// name; it may span lines. An opener without a closer is left as text.
    pub fn protect_plain_tags(&mut self, text: &str) -> String {
        let scrubbed = scrub_sentinels(text);
        let text: &str = &scrubbed;
        // ASCII lowercasing keeps byte offsets aligned with `text`
        let lowered = text.to_ascii_lowercase();

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search_from = 0;

        while let Some(caps) = PLAIN_OPENER.captures_at(text, search_from) {
            let Some(opener) = caps.get(0) else { break };
            let closer = format!("[/{}]", caps[1].to_ascii_lowercase());

            match lowered[opener.end()..].find(&closer) {
                Some(offset) => {
                    let end = opener.end() + offset + closer.len();
                    out.push_str(&text[copied..opener.start()]);
                    let placeholder = self.push(&text[opener.start()..end]);
                    out.push_str(&placeholder);
                    copied = end;
                    search_from = end;
                }
                None => search_from = opener.start() + 1,
            }
        }

        out.push_str(&text[copied..]);
        tracing::debug!(stashed = self.entries.len(), "protected plain BBCode spans");
        out
    }

    /// Puts every stashed span back. Placeholders with no entry restore to nothing.
    pub fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.entries.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Source text must not be able to forge a placeholder.
fn scrub_sentinels(text: &str) -> Cow<'_, str> {
    if text.contains(SENTINEL) {
        tracing::warn!("input contains placeholder sentinel characters, replacing them");
        Cow::Owned(text.replace(SENTINEL, "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}
