//! Inline style and legacy font handling

use crate::common::readme;
use md2bbcode::{html_to_bbcode, ConvertOptions};

fn convert(html: &str) -> String {
    html_to_bbcode(html, &ConvertOptions::default())
}

#[test]
fn test_style_declarations_nest_in_fixed_order() {
    assert_eq!(
        convert(
            "<span style=\"color: #f00; font-size: 12px; font-family: Arial; \
             font-weight: bold; font-style: italic; text-decoration: underline line-through;\">X</span>"
        ),
        "[COLOR=#f00][SIZE=12px][FONT=Arial][S][U][B][I]X[/I][/B][/U][/S][/FONT][/SIZE][/COLOR]"
    );
    assert_eq!(
        convert("<span style=\"font-style: italic; color: blue\">X</span>"),
        "[COLOR=blue][I]X[/I][/COLOR]"
    );
}

#[test]
fn test_invalid_values_drop_only_their_wrapper() {
    assert_eq!(
        convert("<span style=\"color: expression(alert(1)); font-size: 2em; font-weight: 700\">X</span>"),
        "[B]X[/B]"
    );
}

#[test]
fn test_font_family_list_uses_first_family() {
    assert_eq!(
        convert("<span style=\"font-family: 'Comic Sans MS', cursive\">X</span>"),
        "[FONT=Comic Sans MS]X[/FONT]"
    );
}

#[test]
fn test_important_is_ignored() {
    assert_eq!(
        convert("<span style=\"color: red !important\">X</span>"),
        "[COLOR=red]X[/COLOR]"
    );
}

#[test]
fn test_font_tag_in_readme() {
    let lowered = readme("<font color=\"red\" size=\"3\" face=\"Times New Roman\">Hello</font>\n")
        .to_lowercase();
    assert!(lowered.contains("[color=red]"));
    assert!(lowered.contains("[size=3]"));
    assert!(lowered.contains("[font=times new roman]hello[/font]"));
    assert!(lowered.contains("[/size][/color]"));
}

#[test]
fn test_inline_code_keeps_font_markup_literal() {
    let lowered = readme("<font color=\"red\">Red</font> and `<font color=\"red\">Code</font>`\n")
        .to_lowercase();
    assert!(lowered.contains("[color=red]red[/color]"));
    assert!(lowered.contains("[icode]<font color=\"red\">code</font>[/icode]"));
}

#[test]
fn test_oblique_font_style() {
    assert_eq!(
        convert("<span style=\"font-style: oblique\">x</span>"),
        "[I]x[/I]"
    );
}
