//! Markdown format tests
//!
//! End to end README → BBCode conversions through `process_readme` and the registry.

mod blocks;
mod fixture;
mod inline;
mod registry;
