use crate::common::readme;

#[test]
fn test_badge_region_is_removed() {
    let source = "<!-- ALL-CONTRIBUTORS-BADGE:START - Do not remove or modify this section -->\n\
                  [![All Contributors](https://img.shields.io/badge/all_contributors-3-orange.svg)](#contributors)\n\
                  <!-- ALL-CONTRIBUTORS-BADGE:END -->\n\nHello\n";
    assert_eq!(readme(source), "Hello\n\n");
}

#[test]
fn test_unterminated_badge_region_is_kept() {
    let result = readme("<!-- BADGES:START -->\n![b](https://example.com/b.png)\n");
    assert!(result.contains("[IMG]https://example.com/b.png[/IMG]"));
}

#[test]
fn test_badge_markers_inside_code_are_kept() {
    let result = readme("```\n<!-- BADGES:START -->\nx\n<!-- BADGES:END -->\n```\n");
    assert!(result.starts_with("[CODE]"));
    assert!(result.contains("BADGES:START"));
    assert!(result.contains("BADGES:END"));
}

#[test]
fn test_badges_outside_regions_are_rasterized() {
    let result = readme("[![Build](https://github.com/o/r/actions/workflows/ci.yml/badge.svg?branch=main)](https://github.com/o/r/actions)\n");
    assert_eq!(
        result,
        "[URL=https://github.com/o/r/actions][IMG]https://raster.shields.io/github/actions/workflow/status/o/r/ci.yml.png?branch=main[/IMG][/URL]\n\n"
    );
}
