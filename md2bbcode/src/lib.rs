//! README Markdown and HTML to XenForo BBCode
//!
//!     This crate turns README-style Markdown (with whatever raw HTML the author sprinkled in)
//!     into the BBCode dialect understood by XenForo forums.
//!
//!     It is a pure lib: it powers md2bbcode-cli but is shell agnostic, so no code here should
//!     print, read env vars or touch the filesystem. Configuration reaches the converters as an
//!     explicit [`ConvertOptions`] value.
//!
//! Architecture
//!
//!     Conversion is two tree rewrites in a row:
//!
//!     1. The Markdown source is preprocessed (./readme), parsed with comrak and adapted into a
//!        token tree (./ir). The token renderer emits BBCode for everything Markdown knows about
//!        and leaves raw HTML (and HTML-only constructs such as tables) in place.
//!     2. The whole first-pass string is then parsed as HTML and rewritten by the
//!        attribute- and style-aware converter in ./formats/html. BBCode regions whose content
//!        must stay literal (code, images, ...) are stashed before the HTML parse and restored
//!        afterwards (./common/stash.rs).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # ConvertOptions (domain, escape mode)
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── pipeline.rs             # first pass + HTML pass
//!     ├── formats
//!     │   ├── markdown            # comrak adapter + token renderer
//!     │   ├── html                # html5ever tree + HTML converter
//!     │   └── tokens              # serialized token streams
//!     ├── ir                      # Markdown token model
//!     ├── readme                  # README preprocessing and alert collapsing
//!     ├── common                  # URL policy, escaping, stash
//!
//! Testing
//!     tests
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.
//!
//! Output Dialect
//!
//!     Tags are emitted uppercase from a fixed vocabulary (B I U S COLOR SIZE FONT CODE ICODE
//!     LIST * QUOTE HEADING HR URL EMAIL IMG JUMPTO ANAME SPOILER TABLE TR TH TD ABBR ADMONITION
//!     CENTER RIGHT LEFT SUP SUB MARK). Color, size and font options are validated with the same
//!     patterns XenForo applies, and an invalid value drops only its own wrapper.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod options;
pub mod pipeline;
pub mod readme;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use options::ConvertOptions;
pub use pipeline::Conversion;
pub use registry::FormatRegistry;

/// Converts a README written in Markdown into BBCode.
///
/// Runs the full pipeline: preprocessing, token rendering and the HTML pass.
pub fn process_readme(source: &str, options: &ConvertOptions) -> Result<String, FormatError> {
    formats::markdown::MarkdownFormat.to_bbcode(source, options)
}

/// Converts an HTML fragment (or a first-pass render) into BBCode.
///
/// This never fails: unknown markup is passed through literally.
pub fn html_to_bbcode(html: &str, options: &ConvertOptions) -> String {
    formats::html::HtmlConverter::new(options).convert(html)
}
