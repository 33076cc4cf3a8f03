//! Serialized token streams
//!
//! Lets another Markdown parser feed the renderer: the input is a JSON array of tokens in the
//! shape of [`crate::ir::Token`] (`{"type": "paragraph", "children": [...]}`). An unknown token
//! type fails the whole conversion.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::MarkdownRenderer;
use crate::ir::Token;
use crate::options::ConvertOptions;
use crate::readme;

/// Format implementation for JSON token streams
#[derive(Debug, Default, Clone, Copy)]
pub struct TokensFormat;

impl TokensFormat {
    /// Decode a token stream
    pub fn parse(&self, source: &str) -> Result<Vec<Token>, FormatError> {
        Ok(serde_json::from_str(source)?)
    }
}

impl Format for TokensFormat {
    fn name(&self) -> &str {
        "tokens"
    }

    fn description(&self) -> &str {
        "JSON token stream rendered without parsing"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn first_pass(&self, source: &str, options: &ConvertOptions) -> Result<String, FormatError> {
        let tokens = readme::collapse_alerts(self.parse(source)?);
        MarkdownRenderer::new(options).render(&tokens)
    }
}
