//! Owned HTML tree
//!
//! html5ever builds a reference-counted DOM full of `RefCell`s. The converter only reads, so the
//! `<body>` subtree is copied once into plain owned nodes and the rcdom is dropped.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// A node of the owned HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its attributes in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase local name
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl Element {
    /// First value of attribute `name`
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First non-empty value of attribute `name`
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|value| !value.is_empty())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Concatenated text of all descendants; comments are skipped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// First descendant element named `name`, in document order
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            HtmlNode::Element(element) if element.name == name => Some(element),
            HtmlNode::Element(element) => element.find(name),
            _ => None,
        })
    }

    /// A copy of this element with the first descendant named `name` removed
    pub fn without_first(&self, name: &str) -> Element {
        let mut copy = self.clone();
        remove_first(&mut copy.children, name);
        copy
    }
}

fn collect_text(nodes: &[HtmlNode], out: &mut String) {
    for node in nodes {
        match node {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Element(element) => collect_text(&element.children, out),
            HtmlNode::Comment(_) => {}
        }
    }
}

fn remove_first(nodes: &mut Vec<HtmlNode>, name: &str) -> bool {
    for index in 0..nodes.len() {
        if matches!(&nodes[index], HtmlNode::Element(element) if element.name == name) {
            nodes.remove(index);
            return true;
        }
        if let HtmlNode::Element(element) = &mut nodes[index] {
            if remove_first(&mut element.children, name) {
                return true;
            }
        }
    }
    false
}

/// Parses `html` as a document and returns the children of `<body>`.
///
/// The HTML5 tree builder always synthesizes a body; the whole document is used if it somehow
/// does not.
pub fn parse(html: &str) -> Vec<HtmlNode> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let root = find_body(&dom.document).unwrap_or_else(|| dom.document.clone());
    let nodes = root
        .children
        .borrow()
        .iter()
        .filter_map(to_owned_node)
        .collect();
    nodes
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == "body" {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(find_body)
}

fn to_owned_node(handle: &Handle) -> Option<HtmlNode> {
    match &handle.data {
        NodeData::Text { contents } => Some(HtmlNode::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(HtmlNode::Comment(contents.to_string())),
        NodeData::Element { name, attrs, .. } => Some(HtmlNode::Element(Element {
            name: name.local.to_string().to_ascii_lowercase(),
            attrs: attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            children: handle
                .children
                .borrow()
                .iter()
                .filter_map(to_owned_node)
                .collect(),
        })),
        _ => None,
    }
}
