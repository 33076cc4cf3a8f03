//! Conversion options shared by the renderer and the HTML converter

/// Settings for one conversion.
///
/// Passed to each renderer and converter when it is built; nothing reads
/// conversion settings from global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Base URL that relative links and images are resolved against
    pub domain: Option<String>,
    /// HTML-escape text leaves and raw HTML instead of passing them through
    pub escape: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base domain. A blank value clears it.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.domain = if domain.trim().is_empty() {
            None
        } else {
            Some(domain.trim().to_string())
        };
        self
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}
