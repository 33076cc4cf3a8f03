//! Pipeline orchestration
//!
//!     source ──first pass──▶ BBCode + raw HTML ──HTML pass──▶ BBCode
//!
//!     The first pass is format specific (see [`crate::Format::first_pass`]); for Markdown it is
//!     README preprocessing, comrak parsing, alert collapsing and token rendering. The HTML pass
//!     runs over the whole first-pass string, so HTML the renderer emitted on purpose (tables,
//!     superscripts, footnote anchors) and HTML the author wrote are treated the same.

use crate::formats::html::HtmlConverter;
use crate::options::ConvertOptions;

/// Both stages of a conversion.
///
/// The first pass is kept around so callers can dump it for debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub first_pass: String,
    pub bbcode: String,
}

/// Runs the HTML pass over a first-pass render.
pub fn finish(first_pass: String, options: &ConvertOptions) -> Conversion {
    let bbcode = HtmlConverter::new(options).convert(&first_pass);
    tracing::debug!(
        first_pass_len = first_pass.len(),
        bbcode_len = bbcode.len(),
        "conversion finished"
    );
    Conversion { first_pass, bbcode }
}
