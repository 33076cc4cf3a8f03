//! Element handlers through the public entry points

use crate::common::readme;
use insta::assert_snapshot;
use md2bbcode::{html_to_bbcode, ConvertOptions};

fn convert(html: &str) -> String {
    html_to_bbcode(html, &ConvertOptions::default())
}

#[test]
fn test_code_blocks_and_inline_code() {
    let lowered = readme(
        "<pre><code class=\"language-python\">print('hi')</code></pre> and <code>inline</code>",
    )
    .to_lowercase();
    assert!(lowered.contains("[code=python]print('hi')[/code]"));
    assert!(lowered.contains("[icode]inline[/icode]"));
}

#[test]
fn test_lists_and_tables() {
    let lowered = readme(
        "<ul><li>One</li><li>Two</li></ul><ol><li>First</li><li>Second</li></ol>\
         <table><tr><th>H</th><th>H2</th></tr><tr><td>A</td><td>B</td></tr></table>",
    )
    .to_lowercase();

    for expected in [
        "[list]",
        "[*]one",
        "[*]two",
        "[list=1]",
        "[*]first",
        "[*]second",
        "[table]",
        "[tr]",
        "[th]h[/th]",
        "[td]a[/td]",
    ] {
        assert!(lowered.contains(expected), "missing {expected}:\n{lowered}");
    }
}

#[test]
fn test_anchors_and_abbr() {
    let lowered = readme(
        "<a name=\"section\">Target</a> <a href=\"#section\">Jump</a> \
         <abbr title=\"World Health Organization\">WHO</abbr>",
    )
    .to_lowercase();
    assert!(lowered.contains("[aname=section]target[/aname]"));
    assert!(lowered.contains("[jumpto=section]jump[/jumpto]"));
    assert!(lowered.contains("[abbr=world health organization]who[/abbr]"));
}

#[test]
fn test_mailto_alignment_and_attribution() {
    let lowered = readme(
        "<a href=\"mailto:test@example.com?subject=Hello\">Email</a> \
         <p style=\"text-align:center\">Centered</p>\
         <div align=\"right\"><b>Right</b></div>\
         <blockquote data-author=\"Alice\">Quoted</blockquote>",
    )
    .to_lowercase();
    assert!(lowered.contains("[email]test@example.com[/email]"));
    assert!(lowered.contains("[center]centered[/center]"));
    assert!(lowered.contains("[right][b]right[/b][/right]"));
    assert!(lowered.contains("[quote=\"alice\"]"));
    assert!(lowered.contains("quoted"));
}

#[test]
fn test_span_and_div_without_style_convert_children() {
    let lowered = readme("<span><b>Bold</b></span><div><i>Italic</i></div>").to_lowercase();
    assert!(lowered.contains("[b]bold[/b]"));
    assert!(lowered.contains("[i]italic[/i]"));
    assert!(!lowered.contains("<span>"));
    assert!(!lowered.contains("<div>"));
}

#[test]
fn test_unknown_element_passthrough() {
    let result = readme("<custom-tag data-x=\"1\"><b>Bold</b></custom-tag>");
    assert!(result.contains("<custom-tag data-x=\"1\">"));
    assert!(result.contains("<b>Bold</b>"));
    assert!(!result.contains("[B]"));
}

#[test]
fn test_details_become_spoilers() {
    assert_eq!(
        convert("<details><summary>Changelog</summary><ul><li>Fixed</li></ul></details>"),
        "[SPOILER=Changelog][LIST][*]Fixed\n[/LIST]\n[/SPOILER]"
    );
}

#[test]
fn test_image_relative_to_domain() {
    let options = ConvertOptions::new().with_domain("https://example.com/repo/");
    assert_eq!(
        html_to_bbcode("<img src=\"img/logo.png\" alt=\"Logo\">", &options),
        "[IMG alt=\"Logo\"]https://example.com/repo/img/logo.png[/IMG]"
    );
}

#[test]
fn test_plain_bbcode_survives_untouched() {
    let source = "[CODE=html]<b>x</b>[/CODE] [USER=1]<i>Bob</i>[/USER] [PLAIN]<u>u</u>[/PLAIN]";
    assert_eq!(convert(source), source);
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(convert("Fish &amp; Chips"), "Fish & Chips");
}

#[test]
fn test_inline_snapshots() {
    assert_snapshot!(
        convert("<a href=\"https://example.com\"><img src=\"https://example.com/badge.svg\"></a>"),
        @"[URL=https://example.com][IMG]https://images.weserv.nl/?url=https%3A%2F%2Fexample.com%2Fbadge.svg&output=png[/IMG][/URL]"
    );
    assert_snapshot!(
        convert("<font face=\"Courier New, monospace\" size=\"huge\"><u>mono</u></font>"),
        @"[FONT=Courier New][U]mono[/U][/FONT]"
    );
    assert_snapshot!(
        convert("<sup><a href=\"#fn-1\">1</a></sup>"),
        @"[SUP][JUMPTO=fn-1]1[/JUMPTO][/SUP]"
    );
}
