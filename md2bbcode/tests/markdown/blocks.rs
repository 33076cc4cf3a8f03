//! Block-level Markdown constructs

use crate::common::readme;

#[test]
fn test_heading_and_paragraph() {
    assert_eq!(
        readme("# Title\n\nSome text.\n"),
        "[HEADING=1]Title[/HEADING]\nSome text.\n\n"
    );
}

#[test]
fn test_deep_headings_clamp_to_three() {
    assert_eq!(readme("#### Deep\n"), "[HEADING=3]Deep[/HEADING]\n");
    assert_eq!(readme("###### Deeper\n"), "[HEADING=3]Deeper[/HEADING]\n");
}

#[test]
fn test_fenced_code_keeps_language() {
    assert_eq!(
        readme("```bash\necho hi\n```\n"),
        "[CODE=bash]echo hi\n[/CODE]\n\n"
    );
    assert_eq!(readme("```\nplain\n```\n"), "[CODE]plain\n[/CODE]\n\n");
}

#[test]
fn test_fenced_code_is_not_converted_by_the_html_pass() {
    let result = readme("```html\n<b>bold</b>\n```\n");
    assert!(result.starts_with("[CODE=html]"));
    assert!(!result.contains("[B]"));
}

#[test]
fn test_lists() {
    assert_eq!(
        readme("- one\n- two\n"),
        "[LIST][*]one\n[*]two\n[/LIST]\n"
    );
    assert_eq!(
        readme("1. first\n2. second\n"),
        "[LIST=1][*]first\n[*]second\n[/LIST]\n"
    );
}

#[test]
fn test_ordered_list_start_is_not_emitted() {
    let result = readme("3. third\n4. fourth\n");
    assert!(result.starts_with("[LIST=1][*]third\n"));
}

#[test]
fn test_nested_list() {
    let result = readme("- outer\n  - inner\n");
    assert!(result.starts_with("[LIST][*]outer[LIST][*]inner\n[/LIST]\n"));
}

#[test]
fn test_block_quote() {
    assert_eq!(
        readme("> Just a quote.\n> Still quoted.\n"),
        "[QUOTE]\nJust a quote.\nStill quoted.\n\n[/QUOTE]\n"
    );
}

#[test]
fn test_thematic_break() {
    assert_eq!(readme("a\n\n---\n\nb\n"), "a\n\n[HR][/HR]\nb\n\n");
}

#[test]
fn test_github_alerts_become_admonitions() {
    for kind in ["note", "tip", "important", "warning", "caution"] {
        let markdown = format!("> [!{}]\n> Body for {kind}.\n", kind.to_uppercase());
        let lowered = readme(&markdown).to_lowercase();

        assert!(lowered.contains(&format!("[admonition={kind}]")), "{lowered}");
        assert!(lowered.contains(&format!("body for {kind}.")));
        assert!(!lowered.contains(&format!("[!{kind}]")));
        assert!(!lowered.contains("[quote]"));
    }
}

#[test]
fn test_alert_output() {
    assert_eq!(
        readme("> [!TIP]\n> Body.\n"),
        "[ADMONITION=tip]\nBody.\n\n[/ADMONITION]\n"
    );
}

#[test]
fn test_unknown_alert_marker_stays_a_quote() {
    let lowered = readme("> [!FOO]\n> Not a supported GitHub alert type.\n").to_lowercase();
    assert!(lowered.contains("[quote]"));
    assert!(!lowered.contains("[admonition="));
    assert!(lowered.contains("[!foo]"));
}

#[test]
fn test_plain_quote_is_not_an_admonition() {
    let lowered = readme("> Just a quote.\n").to_lowercase();
    assert!(lowered.contains("[quote]"));
    assert!(!lowered.contains("[admonition="));
}

#[test]
fn test_table() {
    let result = readme("| Name | Value |\n|------|:-----:|\n| a    | 1     |\n");
    assert!(result.starts_with("[TABLE]\n"));
    assert!(result.contains("[TR]\n[TH]Name[/TH]\n[TH][CENTER]Value[/CENTER][/TH]\n[/TR]\n"));
    assert!(result.contains("[TR]\n[TD]a[/TD]\n[TD][CENTER]1[/CENTER][/TD]\n[/TR]\n"));
    assert!(result.contains("[/TABLE]\n"));
    assert!(!result.contains("<t"));
}

#[test]
fn test_html_block_goes_through_the_html_pass() {
    assert_eq!(
        readme("<div align=\"center\">\n<b>Centered</b>\n</div>\n"),
        "[CENTER]\n[B]Centered[/B]\n[/CENTER]\n"
    );
}
