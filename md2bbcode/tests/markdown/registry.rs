//! Conversions selected through the format registry

use md2bbcode::{ConvertOptions, FormatError, FormatRegistry};

#[test]
fn test_default_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(registry.list_formats(), vec!["html", "markdown", "tokens"]);
}

#[test]
fn test_detect_format_from_filename() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("README.md"),
        Some("markdown".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("notes.MARKDOWN"),
        Some("markdown".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("page.htm"),
        Some("html".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("tokens.json"),
        Some("tokens".to_string())
    );
    assert_eq!(registry.detect_format_from_filename("README"), None);
}

#[test]
fn test_convert_keeps_both_passes() {
    let registry = FormatRegistry::default();
    let conversion = registry
        .convert("Water is H<sub>2</sub>O.\n", "markdown", &ConvertOptions::default())
        .unwrap();
    assert_eq!(conversion.first_pass, "Water is H<sub>2</sub>O.\n\n");
    assert_eq!(conversion.bbcode, "Water is H[SUB]2[/SUB]O.\n\n");
}

#[test]
fn test_html_format() {
    let registry = FormatRegistry::default();
    let bbcode = registry
        .to_bbcode("<p><b>Hi</b></p>", "html", &ConvertOptions::default())
        .unwrap();
    assert_eq!(bbcode, "[B]Hi[/B]\n\n");
}

#[test]
fn test_tokens_format() {
    let registry = FormatRegistry::default();
    let source = r#"[{"type": "block_quote", "children": [
        {"type": "paragraph", "children": [
            {"type": "text", "raw": "[!WARNING]"},
            {"type": "softbreak"},
            {"type": "text", "raw": "Careful."}
        ]}
    ]}]"#;
    let bbcode = registry
        .to_bbcode(source, "tokens", &ConvertOptions::default())
        .unwrap();
    assert_eq!(bbcode, "[ADMONITION=warning]\nCareful.\n\n[/ADMONITION]\n");
}

#[test]
fn test_unknown_token_type_is_rejected() {
    let registry = FormatRegistry::default();
    let result = registry.to_bbcode(
        r#"[{"type": "footnote_ref", "raw": "1"}]"#,
        "tokens",
        &ConvertOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::InvalidTokens(_))));
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let result = registry.to_bbcode("x", "rst", &ConvertOptions::default());
    match result {
        Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "rst"),
        other => panic!("expected FormatNotFound, got {other:?}"),
    }
}
