//! Inline CSS to BBCode wrapper tags
//!
//! Only the handful of properties BBCode can express are read: `color`, `font-size`,
//! `font-family`, `text-decoration`, `font-weight` and `font-style`. Values are validated with
//! the patterns XenForo applies to tag options; a value that fails drops only its own wrapper.
//!
//! Wrappers always come out in the same nesting order (outermost first):
//!
//!     COLOR > SIZE > FONT > S > U > B > I
//!
//! regardless of the order the declarations were written in.

use once_cell::sync::Lazy;
use regex::Regex;

static COLOR_OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(rgb\(\s*\d+%?\s*,\s*\d+%?\s*,\s*\d+%?\s*\)|#[a-f0-9]{6}|#[a-f0-9]{3}|[a-z]+)$",
    )
    .expect("color pattern is valid")
});
static FONT_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9 \-]+$").expect("font pattern is valid"));
static SIZE_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(px)?$").expect("size pattern is valid"));
static FONT_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^a-z0-9 \-]+").expect("font filter is valid"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace is valid"));

/// Tags a style declaration can produce, in nesting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleTag {
    Color,
    Size,
    Font,
    Strike,
    Underline,
    Bold,
    Italic,
}

impl StyleTag {
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Color => "COLOR",
            StyleTag::Size => "SIZE",
            StyleTag::Font => "FONT",
            StyleTag::Strike => "S",
            StyleTag::Underline => "U",
            StyleTag::Bold => "B",
            StyleTag::Italic => "I",
        }
    }
}

/// One BBCode tag to wrap content in, with its option if it takes one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub tag: StyleTag,
    pub option: Option<String>,
}

impl Wrapper {
    pub fn new(tag: StyleTag, option: Option<String>) -> Self {
        Wrapper { tag, option }
    }
}

/// Parsed `style` attribute. Property names are lowercased; a repeated property keeps its last value.
#[derive(Debug, Default)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub fn parse(style: &str) -> Self {
        let entries = style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .map(|(property, value)| {
                (
                    property.trim().to_ascii_lowercase(),
                    value.trim().to_string(),
                )
            })
            .filter(|(property, _)| !property.is_empty())
            .collect();
        Declarations { entries }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

fn strip_important(value: &str) -> &str {
    match value.to_ascii_lowercase().find("!important") {
        Some(index) => value[..index].trim(),
        None => value.trim(),
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}

/// Validates a color for `[COLOR=...]`.
pub fn sanitize_color(value: &str) -> Option<String> {
    let value = strip_important(strip_quotes(value));
    COLOR_OPTION.is_match(value).then(|| value.to_string())
}

/// Validates a size for `[SIZE=...]`: digits with an optional `px`.
pub fn sanitize_size(value: &str) -> Option<String> {
    let value = strip_important(strip_quotes(value)).to_ascii_lowercase();
    SIZE_OPTION.is_match(&value).then_some(value)
}

/// Picks the first family of a font list and reduces it to characters a font option allows.
pub fn sanitize_font(value: &str) -> Option<String> {
    let value = strip_important(value);
    let first = value.split(',').next().unwrap_or(value);
    let first = strip_quotes(first);
    let cleaned = FONT_DISALLOWED.replace_all(first, " ");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();
    FONT_OPTION.is_match(cleaned).then(|| cleaned.to_string())
}

/// Wrappers for the declarations in `style`, in nesting order.
///
/// Tags listed in `skip` are not produced; callers pass the tag the element already emits and
/// the properties a legacy attribute already covered.
pub fn style_wrappers(style: &str, skip: &[StyleTag]) -> Vec<Wrapper> {
    let declarations = Declarations::parse(style);
    let mut wrappers = Vec::new();
    let mut push = |tag: StyleTag, option: Option<String>| {
        if !skip.contains(&tag) {
            wrappers.push(Wrapper::new(tag, option));
        }
    };

    if let Some(value) = declarations.get("color") {
        match sanitize_color(value) {
            Some(color) => push(StyleTag::Color, Some(color)),
            None => tracing::debug!(%value, "dropping invalid color"),
        }
    }
    if let Some(value) = declarations.get("font-size") {
        match sanitize_size(value) {
            Some(size) => push(StyleTag::Size, Some(size)),
            None => tracing::debug!(%value, "dropping invalid font-size"),
        }
    }
    if let Some(value) = declarations.get("font-family") {
        match sanitize_font(value) {
            Some(font) => push(StyleTag::Font, Some(font)),
            None => tracing::debug!(%value, "dropping invalid font-family"),
        }
    }
    if let Some(value) = declarations.get("text-decoration") {
        let value = value.to_ascii_lowercase();
        if value.contains("line-through") {
            push(StyleTag::Strike, None);
        }
        if value.contains("underline") {
            push(StyleTag::Underline, None);
        }
    }
    if let Some(value) = declarations.get("font-weight") {
        if is_bold(value) {
            push(StyleTag::Bold, None);
        }
    }
    if let Some(value) = declarations.get("font-style") {
        if is_italic(value) {
            push(StyleTag::Italic, None);
        }
    }

    wrappers
}

/// `italic`, or `oblique` with or without an angle
fn is_italic(value: &str) -> bool {
    let keyword = strip_important(value).split_whitespace().next().unwrap_or("");
    keyword.eq_ignore_ascii_case("italic") || keyword.eq_ignore_ascii_case("oblique")
}

fn is_bold(value: &str) -> bool {
    let value = strip_important(value);
    value.eq_ignore_ascii_case("bold") || value.parse::<u32>().map_or(false, |weight| weight >= 700)
}

/// Wraps `content` in `wrappers`, the first wrapper outermost.
pub fn wrap(content: String, wrappers: &[Wrapper]) -> String {
    wrappers.iter().rev().fold(content, |inner, wrapper| {
        let tag = wrapper.tag.name();
        match &wrapper.option {
            Some(option) => format!("[{tag}={option}]{inner}[/{tag}]"),
            None => format!("[{tag}]{inner}[/{tag}]"),
        }
    })
}
