//! Inline Markdown constructs and URL handling

use crate::common::{readme, readme_with};
use md2bbcode::ConvertOptions;

#[test]
fn test_emphasis_strong_strike_code() {
    assert_eq!(
        readme("*a* **b** ~~c~~ `d`\n"),
        "[I]a[/I] [B]b[/B] [S]c[/S] [ICODE]d[/ICODE]\n\n"
    );
}

#[test]
fn test_superscript() {
    assert_eq!(readme("E = mc^2^\n"), "E = mc[SUP]2[/SUP]\n\n");
}

#[test]
fn test_hard_break() {
    assert_eq!(readme("one  \ntwo\n"), "one\ntwo\n\n");
}

#[test]
fn test_link() {
    assert_eq!(
        readme("[Docs](https://example.com/docs)\n"),
        "[URL=https://example.com/docs]Docs[/URL]\n\n"
    );
}

#[test]
fn test_link_query_string_survives() {
    assert_eq!(
        readme("[docs](https://e.com/p?id=1&section=2&not=3)\n"),
        "[URL=https://e.com/p?id=1&section=2&not=3]docs[/URL]\n\n"
    );
}

#[test]
fn test_escaped_markup_stays_literal() {
    assert_eq!(
        readme("Use \\<b>bold\\</b> tags.\n"),
        "Use <b>bold</b> tags.\n\n"
    );
    assert_eq!(
        readme("Write &lt;font color=\"red\"&gt;x&lt;/font&gt; in HTML.\n"),
        "Write <font color=\"red\">x</font> in HTML.\n\n"
    );
}

#[test]
fn test_ampersand_in_text() {
    assert_eq!(readme("Tom &amp; Jerry &copy 2024\n"), "Tom & Jerry &copy 2024\n\n");
}

#[test]
fn test_autolink() {
    assert_eq!(
        readme("See https://example.com for more.\n"),
        "See [URL=https://example.com]https://example.com[/URL] for more.\n\n"
    );
}

#[test]
fn test_relative_link_resolves_against_domain() {
    let options = ConvertOptions::new().with_domain("https://github.com/o/r/blob/main/");
    assert_eq!(
        readme_with("[Guide](docs/guide.md)\n", &options),
        "[URL=https://github.com/o/r/blob/main/docs/guide.md]Guide[/URL]\n\n"
    );
}

#[test]
fn test_relative_link_without_domain_is_unchanged() {
    assert_eq!(
        readme("[Guide](docs/guide.md)\n"),
        "[URL=docs/guide.md]Guide[/URL]\n\n"
    );
}

#[test]
fn test_harmful_link() {
    assert_eq!(
        readme("[x](javascript:alert(1))\n"),
        "[URL=#harmful-link]x[/URL]\n\n"
    );
}

#[test]
fn test_image() {
    assert_eq!(
        readme("![pixel art](https://example.com/pixel.png)\n"),
        "[IMG]https://example.com/pixel.png[/IMG]\n\n"
    );
}

#[test]
fn test_svg_image_is_proxied() {
    assert_eq!(
        readme("![logo](https://example.com/logo.svg)\n"),
        "[IMG]https://images.weserv.nl/?url=https%3A%2F%2Fexample.com%2Flogo.svg&output=png[/IMG]\n\n"
    );
}

#[test]
fn test_actions_badge_is_rasterized() {
    let result = readme(
        "![CI](https://github.com/RedGuides/md2bbcode/actions/workflows/publish.yml/badge.svg)\n",
    );
    assert_eq!(
        result,
        "[IMG]https://raster.shields.io/github/actions/workflow/status/RedGuides/md2bbcode/publish.yml.png[/IMG]\n\n"
    );
}

#[test]
fn test_relative_svg_without_domain_becomes_link() {
    assert_eq!(
        readme("![Logo](docs/logo.svg)\n"),
        "[URL=docs/logo.svg]Logo[/URL]\n\n"
    );
}

#[test]
fn test_relative_image_resolves_against_domain() {
    let options = ConvertOptions::new().with_domain("https://raw.githubusercontent.com/o/r/main/");
    assert_eq!(
        readme_with("![shot](img/shot.png)\n", &options),
        "[IMG]https://raw.githubusercontent.com/o/r/main/img/shot.png[/IMG]\n\n"
    );
}

#[test]
fn test_inline_code_is_literal() {
    assert_eq!(
        readme("Use `<font color=\"red\">x</font>` here\n"),
        "Use [ICODE]<font color=\"red\">x</font>[/ICODE] here\n\n"
    );
}

#[test]
fn test_inline_font_markup() {
    assert_eq!(
        readme("<font color=\"red\" size=\"3\" face=\"Times New Roman\">Hello</font>\n"),
        "[COLOR=red][SIZE=3][FONT=Times New Roman]Hello[/FONT][/SIZE][/COLOR]\n\n"
    );
}

#[test]
fn test_escape_mode_keeps_html_literal() {
    let options = ConvertOptions::new().with_escape(true);
    let result = readme_with("a <b>x</b>\n", &options);
    assert!(result.contains("<b>x</b>"));
    assert!(!result.contains("[B]"));
}

#[test]
fn test_html_inside_markdown_paragraph() {
    let lowered = readme(
        "<b>bold</b> <i>italic</i> <u>under</u> <s>strike</s> <ins>insert</ins> \
         <mark>mark</mark> <kbd>kbd</kbd><br><a href=\"https://example.com\">link</a> \
         <img src=\"https://example.com/x.png\" alt=\"alt text\"><hr>\n",
    )
    .to_lowercase();

    assert!(lowered.contains("[b]bold[/b]"));
    assert!(lowered.contains("[i]italic[/i]"));
    assert!(lowered.contains("[u]under[/u]"));
    assert!(lowered.contains("[s]strike[/s]"));
    assert!(lowered.contains("[u]insert[/u]"));
    assert!(lowered.contains("[mark]mark[/mark]"));
    assert!(lowered.contains("[icode]kbd[/icode]"));
    assert!(lowered.contains("[url=https://example.com]link[/url]"));
    assert!(lowered.contains("[img alt=\"alt text\"]https://example.com/x.png[/img]"));
    assert!(lowered.contains("[hr][/hr]"));
}
