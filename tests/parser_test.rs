//! Tests for the parse → tree pipeline

use rstest::rstest;

use arbori::domain::{parse, parse_with, BlankLines, DomainError, Tree};

/// Expected representation for well-formed input: every source line moves one
/// level down because the root sits above the top-level lines.
fn expected_repr(root: &str, text: &str) -> String {
    let mut out = format!("'{}'\n", root);
    for line in text.lines() {
        let depth = line.len() - line.trim_start_matches(' ').len();
        out.push_str(&format!("{}'{}'\n", " ".repeat(depth + 1), line.trim()));
    }
    out
}

#[rstest]
#[case("single\n")]
#[case("a\nb\nc\n")]
#[case("parent\n child1\n  grandchild1\n   greatgrandchild1\n  grandchild2\n child2\n")]
#[case("src\n bin\n  tools\n lib\ndocs\n api\ntests\n")]
#[case("x\n y\n  z\n y2\nx2\n")]
fn given_well_formed_outline_when_parsing_then_repr_mirrors_indentation(#[case] text: &str) {
    let tree = Tree::new("root", parse(text)).unwrap();
    assert_eq!(tree.to_string(), expected_repr("root", text));
}

#[test]
fn given_text_with_blank_lines_when_parsing_with_skip_then_tree_ignores_them() {
    let text = "a\n\n b\n   \nc\n";

    let tree = Tree::from_text("root", text, BlankLines::Skip).unwrap();

    assert_eq!(tree.to_string(), "'root'\n 'a'\n  'b'\n 'c'\n");
}

#[test]
fn given_text_with_blank_lines_when_parsing_with_reject_then_tree_fails() {
    let text = "a\n\n b\n";

    let result = Tree::new("root", parse_with(text, BlankLines::Reject));

    assert_eq!(result, Err(DomainError::EmptyValue { depth: 0 }));
}

#[test]
fn given_illegal_character_in_text_when_building_then_parse_passes_it_through() {
    let lines = parse("root\n child:1\n child2\n");
    assert_eq!(lines[1].name, "child:1");

    let err = Tree::new("root", lines).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value 'child:1' contains illegal character ':'"
    );
}

#[test]
fn given_windows_line_endings_when_parsing_then_names_are_clean() {
    let tree = Tree::from_text("root", "a\r\n b\r\n", BlankLines::Skip).unwrap();
    assert_eq!(tree.to_string(), "'root'\n 'a'\n  'b'\n");
}

#[test]
fn given_parsed_lines_when_comparing_then_source_order_is_preserved() {
    let lines = parse("z\na\nm\n");
    let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}
