//! Code shared by the Markdown renderer and the HTML converter
//!
//!     - urls: scheme denylist, relative URL resolution and image rasterization
//!     - escape: HTML escaping for escape mode and code blocks
//!     - stash: placeholders that keep plain BBCode regions away from the HTML parser

pub mod escape;
pub mod stash;
pub mod urls;
