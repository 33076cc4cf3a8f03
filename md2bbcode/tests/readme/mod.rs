//! README convention tests
//!
//! Badge regions, footnotes, definition lists, abbreviations and highlights go through the
//! preprocessor and then the full pipeline.

mod badges;
