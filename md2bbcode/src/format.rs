//! Format trait definition
//!
//! This module defines the Format trait every input format implements. A format only knows
//! how to produce the first pass (BBCode mixed with raw HTML); the HTML pass that finishes the
//! conversion is shared and lives in [`crate::pipeline`].

use crate::error::FormatError;
use crate::options::ConvertOptions;
use crate::pipeline::{self, Conversion};

/// Trait for input formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn first_pass(&self, source: &str, options: &ConvertOptions) -> Result<String, FormatError> {
///         // Render source into BBCode, leaving raw HTML for the HTML pass
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render source text into the first pass: BBCode with embedded HTML still present
    ///
    /// Default implementation returns NotSupported error.
    fn first_pass(&self, _source: &str, _options: &ConvertOptions) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' cannot be converted to BBCode",
            self.name()
        )))
    }

    /// Run the first pass and the HTML pass, keeping both results
    fn convert(&self, source: &str, options: &ConvertOptions) -> Result<Conversion, FormatError> {
        let first_pass = self.first_pass(source, options)?;
        Ok(pipeline::finish(first_pass, options))
    }

    /// Convert source text all the way to BBCode
    fn to_bbcode(&self, source: &str, options: &ConvertOptions) -> Result<String, FormatError> {
        self.convert(source, options).map(|conversion| conversion.bbcode)
    }
}
