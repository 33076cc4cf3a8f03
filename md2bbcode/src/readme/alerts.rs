//! GitHub alerts
//!
//! GitHub renders a block quote whose first line is `[!NOTE]`, `[!TIP]`, `[!IMPORTANT]`,
//! `[!WARNING]` or `[!CAUTION]` as a callout. Those quotes become `admonition` tokens carrying
//! the lowercase kind; the marker line itself is dropped. Any other `[!...]` marker leaves the
//! quote as it is.

use crate::ir::{Token, TokenAttrs, TokenKind};

const ALERT_KINDS: &[&str] = &["note", "tip", "important", "warning", "caution"];

/// Replaces every alert block quote in the tree, nested ones included
pub fn collapse_alerts(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().map(collapse_token).collect()
}

fn collapse_token(mut token: Token) -> Token {
    if let Some(children) = token.children.take() {
        token.children = Some(collapse_alerts(children));
    }
    if token.kind == TokenKind::BlockQuote {
        if let Some(admonition) = as_admonition(&token) {
            return admonition;
        }
    }
    token
}

fn as_admonition(quote: &Token) -> Option<Token> {
    let blocks = quote.children();
    let first = blocks.first().filter(|block| block.kind == TokenKind::Paragraph)?;
    let inlines = first.children();

    // comrak may split `[!TIP]` over several text nodes
    let marker_len = inlines
        .iter()
        .take_while(|inline| inline.kind == TokenKind::Text)
        .count();
    let marker: String = inlines[..marker_len]
        .iter()
        .filter_map(|inline| inline.raw.as_deref())
        .collect();
    let kind = alert_kind(marker.trim())?;

    let mut rest = &inlines[marker_len..];
    if matches!(
        rest.first().map(|inline| inline.kind),
        Some(TokenKind::Softbreak | TokenKind::Linebreak)
    ) {
        rest = &rest[1..];
    }

    let mut body = Vec::with_capacity(blocks.len());
    if !rest.is_empty() {
        body.push(Token::container(TokenKind::Paragraph, rest.to_vec()));
    }
    body.extend(blocks[1..].iter().cloned());

    Some(
        Token::container(TokenKind::Admonition, body).with_attrs(TokenAttrs {
            kind: Some(kind),
            ..Default::default()
        }),
    )
}

fn alert_kind(marker: &str) -> Option<String> {
    let name = marker.strip_prefix("[!")?.strip_suffix(']')?.to_ascii_lowercase();
    ALERT_KINDS.contains(&name.as_str()).then_some(name)
}
