//! Calibration table for the heading heuristic.
//!
//! Each case is checked twice: against the predicate directly, and through the
//! segmenter with the line placed between blank lines, where it must come out as
//! a heading exactly when the predicate accepts it.

use doc2json::godoc::parser::is_heading;
use doc2json::{segment, BlockKind};
use rstest::rstest;

#[rstest]
#[case::single_word("Overview")]
#[case::title_case("Implementation Notes")]
#[case::sentence_case("Known issues")]
#[case::single_letter("A")]
#[case::trailing_digit("Section 2")]
#[case::version_number("Go 1.2 Release Notes")]
#[case::qualified_identifier("The net.Conn Interface")]
#[case::possessive("Go's Memory Model")]
#[case::possessive_at_end("The Gopher's")]
#[case::hyphen("Well-Known Types")]
#[case::inner_comma("Errors, Panics and Recovery")]
#[case::inner_parentheses("Using Foo (Advanced) Mode")]
#[case::non_ascii_letters("Überblick der Änderungen")]
fn accepted(#[case] line: &str) {
    assert!(is_heading(line), "expected {:?} to be a heading", line);
    assert_heading_in_context(line, true);
}

#[rstest]
#[case::empty("")]
#[case::leading_space(" Overview")]
#[case::leading_tab("\tOverview")]
#[case::lowercase_start("overview")]
#[case::digit_start("2 Sections")]
#[case::trailing_period("Hello.")]
#[case::trailing_comma("Hello,")]
#[case::trailing_semicolon("Hello;")]
#[case::trailing_colon("Example:")]
#[case::trailing_question("Why Go?")]
#[case::trailing_exclamation("Hello World!")]
#[case::trailing_parenthesis("Examples (Advanced)")]
#[case::sentence_period("Step 1. Install")]
#[case::contraction("Don't Panic")]
#[case::plural_possessive("The Gophers' Home")]
#[case::inner_colon("Note: Read This")]
#[case::inner_semicolon("First; Second")]
#[case::underscore("Read_Me")]
#[case::brackets("Slices [Advanced] Usage")]
#[case::operator("A + B")]
#[case::quote("The \"Best\" Way")]
#[case::tab_inside("Title\tWith Tab")]
fn rejected(#[case] line: &str) {
    assert!(!is_heading(line), "expected {:?} not to be a heading", line);
    if !line.is_empty() && !line.starts_with(char::is_whitespace) {
        assert_heading_in_context(line, false);
    }
}

fn assert_heading_in_context(line: &str, expected: bool) {
    let source = format!("Intro.\n\n{}\n\nMore text.\n", line);
    let doc = segment(&source);
    assert_eq!(doc.len(), 3, "unexpected blocks for {:?}: {:?}", line, doc);
    let kind = doc.blocks()[1].kind;
    let expected_kind = if expected {
        BlockKind::Heading
    } else {
        BlockKind::Paragraph
    };
    assert_eq!(kind, expected_kind, "line {:?}", line);
}
