//! Intermediate representation
//!
//!     Markdown is not rendered straight from comrak's arena. The parser adapter
//!     (formats/markdown/parser.rs) copies the comrak AST into the owned token tree defined here,
//!     which is what the renderer, the alert collapsing pass and the `tokens` format all share.
//!     Keeping it serde-friendly lets another parser hand us a JSON token stream.

pub mod tokens;

pub use tokens::{Alignment, Token, TokenAttrs, TokenKind};
