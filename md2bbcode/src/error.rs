//! Error types for conversion operations

/// Errors that can occur while converting a document to BBCode
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// The Markdown parser produced a node the renderer has no rule for
    #[error("Unsupported Markdown node: {0}")]
    UnsupportedNode(String),

    /// A token lacks an attribute its kind cannot render without
    #[error("Token '{kind}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    /// A serialized token stream could not be decoded
    #[error("Invalid token stream: {0}")]
    InvalidTokens(#[from] serde_json::Error),

    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
