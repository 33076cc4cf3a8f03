//! Conversion of a complete, realistic README

use crate::common::{fixture, readme, readme_with};
use md2bbcode::ConvertOptions;

#[test]
fn test_readme_fixture_tags() {
    let result = readme(&fixture("README.md"));
    let lowered = result.to_lowercase();

    for expected in [
        "[heading=1]md2bbcode[/heading]",
        "[heading=2]installation[/heading]",
        "[heading=3]contact[/heading]",
        "[b]github-flavored[/b]",
        "[i]bbcode[/i]",
        "[url=https://xenforo.com]xenforo[/url]",
        "[img]docs/screenshot.png[/img]",
        "[code=bash]pip install md2bbcode",
        "[icode]md2bbcode readme.md[/icode]",
        "[s]strikethrough[/s]",
        "[sup]superscript[/sup]",
        "[icode]ctrl[/icode]",
        "[list=1]",
        "[admonition=note]",
        "[quote]",
        "[table]",
        "[spoiler=advanced]",
        "[email]team@example.com[/email]",
        "[jumpto=installation]install section[/jumpto]",
    ] {
        assert!(lowered.contains(expected), "missing {expected}:\n{result}");
    }
}

#[test]
fn test_readme_fixture_drops_badges() {
    let result = readme(&fixture("README.md"));
    assert!(!result.contains("shields"));
    assert!(!result.contains("BADGES"));
    assert!(result.starts_with("[HEADING=1]md2bbcode[/HEADING]\n"));
}

#[test]
fn test_readme_fixture_leaves_no_html() {
    let result = readme(&fixture("README.md"));
    for tag in ["<table", "<sup", "<kbd", "<details", "<summary", "<a ", "<p>"] {
        assert!(!result.contains(tag), "{tag} left in:\n{result}");
    }
}

#[test]
fn test_readme_fixture_with_domain() {
    let options = ConvertOptions::new().with_domain("https://github.com/RedGuides/md2bbcode/raw/main/");
    let result = readme_with(&fixture("README.md"), &options);
    assert!(result
        .contains("[IMG]https://github.com/RedGuides/md2bbcode/raw/main/docs/screenshot.png[/IMG]"));
    assert!(result.contains("[URL=https://xenforo.com]XenForo[/URL]"));
}
