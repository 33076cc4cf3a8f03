//! Format implementations
//!
//! Each input format knows how to produce the first pass; the HTML converter finishes every
//! conversion.

pub mod html;
pub mod markdown;
pub mod tokens;

pub use html::{HtmlConverter, HtmlFormat};
pub use markdown::MarkdownFormat;
pub use tokens::TokensFormat;
