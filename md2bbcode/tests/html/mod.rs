//! HTML format tests
//!
//! Tests for HTML → BBCode conversion, both direct and as the second pass of a README.

mod convert;
mod styles;
