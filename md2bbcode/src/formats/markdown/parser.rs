//! Markdown parsing (Markdown → tokens)
//!
//! Converts CommonMark Markdown to the token tree in [`crate::ir::tokens`].
//! Pipeline: Markdown string → Comrak AST → Tokens

use crate::error::FormatError;
use crate::ir::{Alignment, Token, TokenAttrs, TokenKind};
use comrak::nodes::{AstNode, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into block tokens
pub fn parse_markdown(source: &str) -> Result<Vec<Token>, FormatError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let tokens = convert_children(root, false)?;
    tracing::debug!(blocks = tokens.len(), "parsed markdown");
    Ok(tokens)
}

/// The extensions the renderer has rules for. Anything else comrak could emit is an error.
fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.superscript = true;
    options
}

/// `tight` is set for the children of a tight list item, whose paragraphs render without spacing
fn convert_children<'a>(node: &'a AstNode<'a>, tight: bool) -> Result<Vec<Token>, FormatError> {
    node.children()
        .map(|child| convert_node(child, tight))
        .collect()
}

fn convert_node<'a>(node: &'a AstNode<'a>, tight: bool) -> Result<Token, FormatError> {
    let data = node.data.borrow();
    let token = match &data.value {
        // Blocks
        NodeValue::Paragraph => {
            let kind = if tight {
                TokenKind::BlockText
            } else {
                TokenKind::Paragraph
            };
            Token::container(kind, convert_children(node, false)?)
        }
        NodeValue::Heading(heading) => {
            Token::container(TokenKind::Heading, convert_children(node, false)?).with_attrs(
                TokenAttrs {
                    level: Some(heading.level),
                    ..Default::default()
                },
            )
        }
        NodeValue::BlockQuote => {
            Token::container(TokenKind::BlockQuote, convert_children(node, false)?)
        }
        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, comrak::nodes::ListType::Ordered);
            Token::container(TokenKind::List, convert_children(node, list.tight)?).with_attrs(
                TokenAttrs {
                    ordered: Some(ordered),
                    start: ordered.then_some(list.start as u64),
                    ..Default::default()
                },
            )
        }
        NodeValue::Item(_) => Token::container(TokenKind::ListItem, convert_children(node, tight)?),
        NodeValue::CodeBlock(code) => {
            let info = code.info.trim();
            Token::leaf(TokenKind::BlockCode, code.literal.to_string()).with_attrs(TokenAttrs {
                info: (!info.is_empty()).then(|| info.to_string()),
                ..Default::default()
            })
        }
        NodeValue::HtmlBlock(html) => {
            Token::leaf(TokenKind::BlockHtml, html.literal.trim_end_matches('\n'))
        }
        NodeValue::ThematicBreak => Token::empty(TokenKind::ThematicBreak),
        NodeValue::Table(table) => {
            let rows = node
                .children()
                .map(|row| convert_table_row(row, &table.alignments))
                .collect::<Result<Vec<_>, _>>()?;
            Token::container(TokenKind::Table, rows)
        }

        // Inlines
        NodeValue::Text(text) => Token::text(text.to_string()),
        NodeValue::SoftBreak => Token::empty(TokenKind::Softbreak),
        NodeValue::LineBreak => Token::empty(TokenKind::Linebreak),
        NodeValue::Code(code) => Token::leaf(TokenKind::Codespan, code.literal.to_string()),
        NodeValue::HtmlInline(html) => Token::leaf(TokenKind::InlineHtml, html.to_string()),
        NodeValue::Emph => Token::container(TokenKind::Emphasis, convert_children(node, false)?),
        NodeValue::Strong => Token::container(TokenKind::Strong, convert_children(node, false)?),
        NodeValue::Strikethrough => {
            Token::container(TokenKind::Strikethrough, convert_children(node, false)?)
        }
        NodeValue::Superscript => {
            Token::container(TokenKind::Superscript, convert_children(node, false)?)
        }
        NodeValue::Link(link) => {
            Token::container(TokenKind::Link, convert_children(node, false)?)
                .with_attrs(link_attrs(&link.url, &link.title))
        }
        NodeValue::Image(link) => {
            Token::container(TokenKind::Image, convert_children(node, false)?)
                .with_attrs(link_attrs(&link.url, &link.title))
        }

        other => return Err(FormatError::UnsupportedNode(variant_name(other))),
    };
    Ok(token)
}

fn convert_table_row<'a>(
    row: &'a AstNode<'a>,
    alignments: &[TableAlignment],
) -> Result<Token, FormatError> {
    let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
    let cells = row
        .children()
        .enumerate()
        .map(|(column, cell)| {
            let align = match alignments.get(column) {
                Some(TableAlignment::Left) => Some(Alignment::Left),
                Some(TableAlignment::Center) => Some(Alignment::Center),
                Some(TableAlignment::Right) => Some(Alignment::Right),
                _ => None,
            };
            Ok(
                Token::container(TokenKind::TableCell, convert_children(cell, false)?)
                    .with_attrs(TokenAttrs {
                        align,
                        head: Some(header),
                        ..Default::default()
                    }),
            )
        })
        .collect::<Result<Vec<_>, FormatError>>()?;
    Ok(Token::container(TokenKind::TableRow, cells))
}

fn link_attrs(url: &str, title: &str) -> TokenAttrs {
    TokenAttrs {
        url: Some(url.to_string()),
        title: (!title.is_empty()).then(|| title.to_string()),
        ..Default::default()
    }
}

fn variant_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}
