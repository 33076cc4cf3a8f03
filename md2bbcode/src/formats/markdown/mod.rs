//! Markdown format implementation
//!
//! This module implements README Markdown → BBCode.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. It is CommonMark compliant, robust, and
//! ships the GitHub extensions READMEs lean on (tables, strikethrough, autolinks).
//!
//! # Element Mapping Table
//!
//! | Markdown                 | Token            | BBCode (first pass)                        |
//! |--------------------------|------------------|--------------------------------------------|
//! | `# Heading`              | heading          | `[HEADING=n]`, levels 4-6 as 3             |
//! | Paragraph                | paragraph        | text + blank line                          |
//! | Tight list item text     | block_text       | text                                       |
//! | `- item` / `1. item`     | list / list_item | `[LIST]` / `[LIST=1]`, `[*]`               |
//! | `> quote`                | block_quote      | `[QUOTE]`                                  |
//! | `> [!TIP]` alert         | admonition       | `[ADMONITION=tip]`                         |
//! | Fenced code              | block_code       | `[CODE=lang]`, body HTML-escaped           |
//! | `---`                    | thematic_break   | `[HR][/HR]`                                |
//! | Table                    | table / row/cell | HTML table, converted by the HTML pass     |
//! | `*em*` / `**strong**`    | emphasis/strong  | `[I]` / `[B]`                              |
//! | `~~strike~~`             | strikethrough    | `[S]`                                      |
//! | `^sup^`                  | superscript      | `<sup>`, converted by the HTML pass        |
//! | `` `code` ``             | codespan         | `[ICODE]`                                  |
//! | `[text](url)`            | link             | `[URL=resolved]`                           |
//! | `![alt](url)`            | image            | `[IMG]rasterized[/IMG]`                    |
//! | Raw HTML                 | *_html           | passed through to the HTML pass            |
//!
//! # Preprocessing
//!
//! Before comrak sees the source, [`crate::readme::preprocess`] strips badge regions and
//! rewrites footnotes, definition lists, abbreviations and highlights into plain Markdown/HTML.
//! After parsing, [`crate::readme::collapse_alerts`] turns GitHub alert quotes into
//! admonition tokens.

pub mod parser;
pub mod renderer;

pub use parser::parse_markdown;
pub use renderer::MarkdownRenderer;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ConvertOptions;
use crate::readme;

/// Format implementation for README Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "README-style CommonMark with GitHub extensions"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn first_pass(&self, source: &str, options: &ConvertOptions) -> Result<String, FormatError> {
        let source = readme::preprocess(source);
        let tokens = readme::collapse_alerts(parse_markdown(&source)?);
        MarkdownRenderer::new(options).render(&tokens)
    }
}
