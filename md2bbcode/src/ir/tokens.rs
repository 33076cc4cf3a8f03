//! Markdown token model

use serde::{Deserialize, Serialize};

/// Every token kind the renderer has a rule for.
///
/// The set is closed: a serialized stream with any other `type` fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Inline
    Text,
    Emphasis,
    Strong,
    Strikethrough,
    Link,
    Image,
    Codespan,
    Linebreak,
    Softbreak,
    InlineHtml,
    Superscript,
    // Block
    Paragraph,
    Heading,
    BlankLine,
    ThematicBreak,
    BlockText,
    BlockCode,
    BlockQuote,
    BlockHtml,
    BlockError,
    List,
    ListItem,
    Admonition,
    Table,
    TableRow,
    TableCell,
}

impl TokenKind {
    /// The serialized name of this kind
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Emphasis => "emphasis",
            TokenKind::Strong => "strong",
            TokenKind::Strikethrough => "strikethrough",
            TokenKind::Link => "link",
            TokenKind::Image => "image",
            TokenKind::Codespan => "codespan",
            TokenKind::Linebreak => "linebreak",
            TokenKind::Softbreak => "softbreak",
            TokenKind::InlineHtml => "inline_html",
            TokenKind::Superscript => "superscript",
            TokenKind::Paragraph => "paragraph",
            TokenKind::Heading => "heading",
            TokenKind::BlankLine => "blank_line",
            TokenKind::ThematicBreak => "thematic_break",
            TokenKind::BlockText => "block_text",
            TokenKind::BlockCode => "block_code",
            TokenKind::BlockQuote => "block_quote",
            TokenKind::BlockHtml => "block_html",
            TokenKind::BlockError => "block_error",
            TokenKind::List => "list",
            TokenKind::ListItem => "list_item",
            TokenKind::Admonition => "admonition",
            TokenKind::Table => "table",
            TokenKind::TableRow => "table_row",
            TokenKind::TableCell => "table_cell",
        }
    }
}

/// Horizontal alignment, shared by table cells and aligned HTML blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parses an `align` attribute or `text-align` value. Anything unknown (`justify`) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// The BBCode block tag for this alignment
    pub fn tag(self) -> &'static str {
        match self {
            Alignment::Left => "LEFT",
            Alignment::Center => "CENTER",
            Alignment::Right => "RIGHT",
        }
    }
}

/// Structural attributes. Which ones a kind needs is decided by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<bool>,
}

impl TokenAttrs {
    pub fn is_empty(&self) -> bool {
        *self == TokenAttrs::default()
    }
}

/// A node of the Markdown token tree.
///
/// Leaves carry `raw`, containers carry `children`. Tokens are built once per document and
/// only read while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Token>>,
    #[serde(default, skip_serializing_if = "TokenAttrs::is_empty")]
    pub attrs: TokenAttrs,
}

impl Token {
    /// A token with neither text nor children (breaks, rules)
    pub fn empty(kind: TokenKind) -> Self {
        Token {
            kind,
            raw: None,
            children: None,
            attrs: TokenAttrs::default(),
        }
    }

    pub fn leaf(kind: TokenKind, raw: impl Into<String>) -> Self {
        Token {
            raw: Some(raw.into()),
            ..Token::empty(kind)
        }
    }

    pub fn container(kind: TokenKind, children: Vec<Token>) -> Self {
        Token {
            children: Some(children),
            ..Token::empty(kind)
        }
    }

    pub fn text(raw: impl Into<String>) -> Self {
        Token::leaf(TokenKind::Text, raw)
    }

    pub fn with_attrs(mut self, attrs: TokenAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn children(&self) -> &[Token] {
        self.children.as_deref().unwrap_or(&[])
    }
}
