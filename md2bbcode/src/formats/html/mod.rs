//! HTML format implementation
//!
//! This module converts HTML into BBCode. It also runs as the second pass of every other
//! format: the Markdown renderer leaves raw and generated HTML in its output, and this converter
//! finishes the job.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! The parser recovers from anything, which matters here: the input is forum-bound README
//! text with BBCode brackets and stray angle brackets mixed in.
//!
//! # Element Mapping Table
//!
//! | HTML                              | BBCode                                   | Notes                                        |
//! |-----------------------------------|------------------------------------------|----------------------------------------------|
//! | `b` `strong` / `i` `em`           | `[B]` / `[I]`                            | plus style wrappers, minus the own tag       |
//! | `u` `ins` / `s` `del` `strike`    | `[U]` / `[S]`                            |                                              |
//! | `sup` `sub` `mark`                | `[SUP]` `[SUB]` `[MARK]`                 |                                              |
//! | `font`                            | `[COLOR]` `[SIZE]` `[FONT]`              | legacy attributes first, then `style`        |
//! | `span`                            | style wrappers only                      |                                              |
//! | `div` / `p`                       | style + `[CENTER]` `[RIGHT]` `[LEFT]`    | `p` adds a blank line                        |
//! | `blockquote`                      | `[QUOTE]` / `[QUOTE="who"]`              | author from `data-*` attributes or `cite`    |
//! | `a`                               | `[URL]` `[EMAIL]` `[JUMPTO]` `[ANAME]`   | by href shape                                |
//! | `img`                             | `[IMG]` / `[IMG alt="…"]`                | SVG rasterized, else degraded to `[URL]`     |
//! | `pre` / `code` / `kbd`            | `[CODE=lang]` / `[ICODE]`                | language from `language-*` / `lang-*` class  |
//! | `ul` / `ol` / `li`                | `[LIST]` / `[LIST=1]` / `[*]`            |                                              |
//! | `table` `tr` `th` `td`            | `[TABLE]` `[TR]` `[TH]` `[TD]`           | cells keep style and alignment               |
//! | `details` + `summary`             | `[SPOILER=title]`                        |                                              |
//! | `abbr`                            | `[ABBR=title]`                           |                                              |
//! | `br` / `hr`                       | newline / `[HR][/HR]`                    |                                              |
//! | anything else                     | literal markup                           | children kept as markup                      |
//!
//! # Known Parser Effects
//!
//! html5ever parses a full document, so whitespace and comments before the first body content
//! are not part of the output, and tables gain the implied `tbody`.

pub mod converter;
pub mod dom;
pub mod style;

pub use converter::HtmlConverter;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ConvertOptions;

/// Format implementation for HTML input
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML converted straight to BBCode"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    /// HTML has nothing to render before the HTML pass
    fn first_pass(&self, source: &str, _options: &ConvertOptions) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}
