//! Token rendering (tokens → first-pass BBCode)
//!
//! Markdown-native constructs become BBCode here. Constructs BBCode spells as HTML-ish blocks
//! (tables, superscript) are emitted as HTML on purpose so the HTML pass converts them
//! together with the author's own markup.

use crate::common::escape::{escape_html, escape_keeping_entities, escape_text};
use crate::common::urls;
use crate::error::FormatError;
use crate::ir::{Token, TokenKind};
use crate::options::ConvertOptions;

/// Renders a token tree into BBCode with raw HTML left in place
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: ConvertOptions,
}

impl MarkdownRenderer {
    pub fn new(options: &ConvertOptions) -> Self {
        MarkdownRenderer {
            options: options.clone(),
        }
    }

    /// Renders `tokens` in order. Any token missing a required attribute fails the whole render.
    pub fn render(&self, tokens: &[Token]) -> Result<String, FormatError> {
        tokens.iter().map(|token| self.render_token(token)).collect()
    }

    fn render_token(&self, token: &Token) -> Result<String, FormatError> {
        let text = match (&token.raw, &token.children) {
            (Some(raw), _) => raw.clone(),
            (None, Some(children)) => self.render(children)?,
            (None, None) => String::new(),
        };
        let attrs = &token.attrs;

        let out = match token.kind {
            TokenKind::Text => self.text(&text),
            TokenKind::Emphasis => format!("[I]{text}[/I]"),
            TokenKind::Strong => format!("[B]{text}[/B]"),
            TokenKind::Strikethrough => format!("[S]{text}[/S]"),
            TokenKind::Link => {
                let url = attrs.url.as_deref().ok_or_else(|| missing(token, "url"))?;
                let url = urls::resolve(url, self.options.domain());
                format!("[URL={}]{text}[/URL]", escape_text(&url))
            }
            TokenKind::Image => {
                let url = attrs.url.as_deref().ok_or_else(|| missing(token, "url"))?;
                self.image(&text, url)
            }
            TokenKind::Codespan => format!("[ICODE]{}[/ICODE]", self.escaped(&text)),
            TokenKind::Linebreak | TokenKind::Softbreak => "\n".to_string(),
            TokenKind::InlineHtml => self.escaped(&text),
            TokenKind::Superscript => format!("<sup>{text}</sup>"),

            TokenKind::Paragraph => format!("{text}\n\n"),
            TokenKind::BlockText => text,
            TokenKind::Heading => {
                let level = attrs.level.ok_or_else(|| missing(token, "level"))?;
                let level = if (1..=3).contains(&level) { level } else { 3 };
                format!("[HEADING={level}]{text}[/HEADING]\n")
            }
            TokenKind::BlankLine => String::new(),
            TokenKind::ThematicBreak => "[HR][/HR]\n".to_string(),
            TokenKind::BlockCode => block_code(&text, attrs.info.as_deref()),
            TokenKind::BlockQuote => format!("[QUOTE]\n{text}[/QUOTE]\n"),
            TokenKind::BlockHtml if self.options.escape => {
                format!("<p>{}</p>\n", escape_html(text.trim()))
            }
            TokenKind::BlockHtml => format!("{text}\n"),
            TokenKind::BlockError => format!("[COLOR=red][ICODE]{text}[/ICODE][/COLOR]\n"),
            TokenKind::List if attrs.ordered == Some(true) => format!("[LIST=1]{text}[/LIST]\n"),
            TokenKind::List => format!("[LIST]{text}[/LIST]\n"),
            TokenKind::ListItem => format!("[*]{text}\n"),
            TokenKind::Admonition => {
                let kind = attrs.kind.as_deref().ok_or_else(|| missing(token, "kind"))?;
                format!("[ADMONITION={kind}]\n{text}[/ADMONITION]\n")
            }

            TokenKind::Table => format!("<table>{text}</table>\n"),
            TokenKind::TableRow => format!("<tr>{text}</tr>"),
            TokenKind::TableCell => {
                let tag = if attrs.head == Some(true) { "th" } else { "td" };
                match attrs.align {
                    Some(align) => {
                        format!("<{tag} style=\"text-align:{}\">{text}</{tag}>", align.css())
                    }
                    None => format!("<{tag}>{text}</{tag}>"),
                }
            }
        };
        Ok(out)
    }

    fn escaped(&self, text: &str) -> String {
        if self.options.escape {
            escape_html(text)
        } else {
            text.to_string()
        }
    }

    /// Parsed text is already decoded, so it is re-escaped for the HTML pass to decode once.
    fn text(&self, text: &str) -> String {
        if self.options.escape {
            escape_html(text)
        } else {
            escape_text(text)
        }
    }

    /// `alt` is the rendered alt text
    fn image(&self, alt: &str, url: &str) -> String {
        let resolved = urls::resolve(url, self.options.domain());
        match urls::rasterize(&resolved) {
            Some(src) => format!("[IMG]{src}[/IMG]"),
            None => {
                let target = escape_text(&resolved);
                let label = if alt.is_empty() { target.as_str() } else { alt };
                format!("[URL={target}]{label}[/URL]")
            }
        }
    }
}

fn block_code(code: &str, info: Option<&str>) -> String {
    let language = info
        .map(escape_keeping_entities)
        .and_then(|info| info.split_whitespace().next().map(str::to_string));
    let body = escape_html(code);
    match language {
        Some(language) => format!("[CODE={language}]{body}[/CODE]\n\n"),
        None => format!("[CODE]{body}[/CODE]\n\n"),
    }
}

fn missing(token: &Token, attribute: &'static str) -> FormatError {
    FormatError::MissingAttribute {
        kind: token.kind.name(),
        attribute,
    }
}
