//! HTML tree to BBCode
//!
//! Recursive descent over the owned tree from [`super::dom`]. Each recognized element has a
//! handler; everything else is written back out as literal markup.
//!
//! BBCode has no escape for a double quote inside a quoted option, so quote authors and image
//! alt text have their `"` replaced with `'`.

use super::dom::{self, Element, HtmlNode};
use super::style::{self, sanitize_color, sanitize_font, sanitize_size, StyleTag, Wrapper};
use crate::common::escape::escape_attribute;
use crate::common::stash::Stash;
use crate::common::urls;
use crate::ir::Alignment;
use crate::options::ConvertOptions;

/// Attributes that can name a quote's author, first non-empty wins
const QUOTE_ATTRIBUTION: &[&str] = &[
    "data-quote",
    "data-attribution",
    "data-author",
    "data-username",
    "data-cite",
    "cite",
];

/// Elements that never get a closing tag when passed through
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Rewrites HTML (or BBCode with HTML mixed in) into BBCode
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    domain: Option<String>,
}

impl HtmlConverter {
    pub fn new(options: &ConvertOptions) -> Self {
        HtmlConverter {
            domain: options.domain.clone(),
        }
    }

    /// Converts `html`. Plain BBCode regions in the input come out byte for byte.
    pub fn convert(&self, html: &str) -> String {
        let mut stash = Stash::new();
        let protected = stash.protect_plain_tags(html);
        let nodes = dom::parse(&protected);
        let converted = self.convert_nodes(&nodes, None);
        stash.restore(&converted)
    }

    fn convert_nodes(&self, nodes: &[HtmlNode], parent: Option<&str>) -> String {
        nodes
            .iter()
            .map(|node| self.convert_node(node, parent))
            .collect()
    }

    fn convert_children(&self, element: &Element) -> String {
        self.convert_nodes(&element.children, Some(&element.name))
    }

    fn convert_node(&self, node: &HtmlNode, parent: Option<&str>) -> String {
        match node {
            HtmlNode::Text(text) => text.clone(),
            HtmlNode::Comment(comment) => format!("<!--{comment}-->"),
            HtmlNode::Element(element) => self.convert_element(element, parent),
        }
    }

    fn convert_element(&self, element: &Element, parent: Option<&str>) -> String {
        match element.name.as_str() {
            "b" | "strong" => self.simple(element, "B", Some(StyleTag::Bold)),
            "i" | "em" => self.simple(element, "I", Some(StyleTag::Italic)),
            "u" | "ins" => self.simple(element, "U", Some(StyleTag::Underline)),
            "s" | "del" | "strike" => self.simple(element, "S", Some(StyleTag::Strike)),
            "sup" => self.simple(element, "SUP", None),
            "sub" => self.simple(element, "SUB", None),
            "mark" => self.simple(element, "MARK", None),
            "font" => self.font(element),
            "span" => self.styled(element, self.convert_children(element), &[]),
            "div" => self.block(element),
            "p" => self.block(element) + "\n\n",
            "blockquote" => self.blockquote(element),
            "a" => self.anchor(element),
            "img" => self.image(element),
            "pre" => self.pre(element),
            "code" if parent == Some("pre") => String::new(),
            "code" | "kbd" => format!("[ICODE]{}[/ICODE]", element.text()),
            "ul" => format!("[LIST]{}[/LIST]\n", self.convert_children(element)),
            "ol" => format!("[LIST=1]{}[/LIST]\n", self.convert_children(element)),
            "li" => format!("[*]{}\n", self.convert_children(element)),
            "table" => format!("[TABLE]\n{}[/TABLE]\n", self.convert_children(element)),
            "thead" | "tbody" | "tfoot" => self.convert_children(element),
            "tr" => format!("[TR]\n{}[/TR]\n", self.convert_children(element)),
            "th" => self.cell(element, "TH"),
            "td" => self.cell(element, "TD"),
            "details" => self.details(element),
            "abbr" => self.abbr(element),
            "br" => "\n".to_string(),
            "hr" => "[HR][/HR]\n".to_string(),
            _ => self.passthrough(element),
        }
    }

    /// `<b>`, `<i>` and friends: the element's own tag, then whatever its style adds
    fn simple(&self, element: &Element, tag: &str, own: Option<StyleTag>) -> String {
        let content = format!("[{tag}]{}[/{tag}]", self.convert_children(element));
        self.styled(element, content, own.as_slice())
    }

    fn styled(&self, element: &Element, content: String, skip: &[StyleTag]) -> String {
        match element.non_empty_attr("style") {
            Some(css) => style::wrap(content, &style::style_wrappers(css, skip)),
            None => content,
        }
    }

    /// Legacy `color`/`size`/`face` first; `style` only fills in what they did not cover
    fn font(&self, element: &Element) -> String {
        let mut wrappers = Vec::new();
        let mut covered = Vec::new();
        let legacy: [(&str, StyleTag, fn(&str) -> Option<String>); 3] = [
            ("color", StyleTag::Color, sanitize_color),
            ("size", StyleTag::Size, sanitize_size),
            ("face", StyleTag::Font, sanitize_font),
        ];
        for (attribute, tag, sanitize) in legacy {
            let Some(value) = element.attr(attribute) else {
                continue;
            };
            match sanitize(value) {
                Some(option) => {
                    wrappers.push(Wrapper::new(tag, Some(option)));
                    covered.push(tag);
                }
                None => tracing::debug!(%attribute, %value, "dropping invalid font attribute"),
            }
        }
        if let Some(css) = element.non_empty_attr("style") {
            wrappers.extend(style::style_wrappers(css, &covered));
        }

        style::wrap(self.convert_children(element), &wrappers)
    }

    fn alignment(&self, element: &Element) -> Option<Alignment> {
        match element.non_empty_attr("align") {
            Some(align) => Alignment::parse(align),
            None => element
                .non_empty_attr("style")
                .map(style::Declarations::parse)
                .and_then(|declarations| declarations.get("text-align").and_then(Alignment::parse)),
        }
    }

    fn aligned(&self, element: &Element, content: String) -> String {
        match self.alignment(element) {
            Some(alignment) => {
                let tag = alignment.tag();
                format!("[{tag}]{content}[/{tag}]")
            }
            None => content,
        }
    }

    /// `div` and `p`: style, then alignment outside it
    fn block(&self, element: &Element) -> String {
        let content = self.styled(element, self.convert_children(element), &[]);
        self.aligned(element, content)
    }

    fn blockquote(&self, element: &Element) -> String {
        let content = self.block(element);
        let author = QUOTE_ATTRIBUTION
            .iter()
            .filter_map(|attribute| element.attr(attribute))
            .map(str::trim)
            .find(|value| !value.is_empty());
        match author {
            Some(author) => format!(
                "[QUOTE=\"{}\"]\n{content}[/QUOTE]\n",
                author.replace('"', "'")
            ),
            None => format!("[QUOTE]\n{content}[/QUOTE]\n"),
        }
    }

    fn anchor(&self, element: &Element) -> String {
        if let Some(href) = element.attr("href").map(str::trim).filter(|h| !h.is_empty()) {
            if let Some(email) = mailto_address(href) {
                return format!("[EMAIL]{email}[/EMAIL]");
            }
            let text = self.convert_children(element);
            if let Some(target) = href.strip_prefix('#').filter(|target| !target.is_empty()) {
                return format!("[JUMPTO={target}]{text}[/JUMPTO]");
            }
            let url = urls::resolve(href, self.domain.as_deref());
            return format!("[URL={url}]{text}[/URL]");
        }

        let name = element
            .non_empty_attr("name")
            .or_else(|| element.non_empty_attr("id"));
        match name {
            Some(name) => format!("[ANAME={name}]{}[/ANAME]", self.convert_children(element)),
            None => self.passthrough(element),
        }
    }

    fn image(&self, element: &Element) -> String {
        let Some(src) = element.non_empty_attr("src") else {
            return self.passthrough(element);
        };
        let alt = element.attr("alt").unwrap_or("");
        let resolved = urls::resolve(src, self.domain.as_deref());

        match urls::rasterize(&resolved) {
            None => {
                let label = if alt.is_empty() { resolved.as_str() } else { alt };
                format!("[URL={resolved}]{label}[/URL]")
            }
            Some(url) if alt.is_empty() => format!("[IMG]{url}[/IMG]"),
            Some(url) => format!("[IMG alt=\"{}\"]{url}[/IMG]", alt.replace('"', "'")),
        }
    }

    fn pre(&self, element: &Element) -> String {
        let source = element.find("code").unwrap_or(element);
        let text = source.text();
        let language = source.classes().find_map(|class| {
            class
                .strip_prefix("language-")
                .or_else(|| class.strip_prefix("lang-"))
                .filter(|language| !language.is_empty())
        });
        match language {
            Some(language) => format!("[CODE={language}]{text}[/CODE]\n"),
            None => format!("[CODE]{text}[/CODE]\n"),
        }
    }

    fn cell(&self, element: &Element, tag: &str) -> String {
        let content = self.styled(element, self.convert_children(element), &[]);
        let content = self.aligned(element, content);
        format!("[{tag}]{content}[/{tag}]\n")
    }

    fn details(&self, element: &Element) -> String {
        let Some(summary) = element.find("summary") else {
            return format!("[SPOILER]{}[/SPOILER]", self.convert_children(element));
        };
        let title = self.convert_children(summary).trim().to_string();
        let content = self.convert_children(&element.without_first("summary"));
        if title.is_empty() {
            format!("[SPOILER]{content}[/SPOILER]")
        } else {
            format!("[SPOILER={title}]{content}[/SPOILER]")
        }
    }

    fn abbr(&self, element: &Element) -> String {
        match element.non_empty_attr("title") {
            Some(title) => format!("[ABBR={title}]{}[/ABBR]", self.convert_children(element)),
            None => self.passthrough(element),
        }
    }

    /// Unknown elements are written back as literal markup, children included
    fn passthrough(&self, element: &Element) -> String {
        tracing::debug!(element = %element.name, "passing element through");
        let mut out = String::new();
        write_markup(element, &mut out);
        out
    }
}

fn write_markup(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attrs {
        out.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&element.name.as_str()) {
        return;
    }
    for child in &element.children {
        match child {
            HtmlNode::Text(text) => out.push_str(text),
            HtmlNode::Comment(comment) => out.push_str(&format!("<!--{comment}-->")),
            HtmlNode::Element(child) => write_markup(child, out),
        }
    }
    out.push_str(&format!("</{}>", element.name));
}

fn mailto_address(href: &str) -> Option<&str> {
    let scheme = href.get(..7)?;
    if !scheme.eq_ignore_ascii_case("mailto:") {
        return None;
    }
    let address = href[7..].trim();
    let address = address.split('?').next().unwrap_or(address);
    (!address.is_empty()).then_some(address)
}
