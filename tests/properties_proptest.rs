//! Property-based tests for the segmenter
//!
//! Inputs are built line by line from three pools (blank, indented, text) so that
//! every interesting transition shows up often. Text lines are drawn partly from
//! title-like phrases so that headings are produced as well.

use doc2json::{segment, BlockKind};
use proptest::prelude::*;

fn blank_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\n".to_string()),
        Just(" \n".to_string()),
        Just("\t\n".to_string()),
        Just("  \t \n".to_string()),
    ]
}

fn indented_line() -> impl Strategy<Value = String> {
    ("[ \t]{1,3}", "[a-z(){}:=.]{1,12}( [a-z0-9]{1,6}){0,3}")
        .prop_map(|(indent, code)| format!("{indent}{code}\n"))
}

fn text_line() -> impl Strategy<Value = String> {
    prop_oneof![
        // Title-like
        "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,3}".prop_map(|s| format!("{s}\n")),
        // Sentence-like
        "[A-Za-z][a-z]{0,8}( [a-z]{1,8}){0,6}[.,:;]".prop_map(|s| format!("{s}\n")),
    ]
}

fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![blank_line(), indented_line(), text_line()]
}

fn doc_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any_line(), 0..30).prop_map(|lines| lines.concat())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

proptest! {
    #[test]
    fn blocks_are_never_empty(text in doc_text()) {
        let doc = segment(&text);
        for block in &doc {
            prop_assert!(!block.lines.is_empty());
        }
    }

    #[test]
    fn headings_have_exactly_one_line(text in doc_text()) {
        let doc = segment(&text);
        for block in doc.iter().filter(|b| b.kind == BlockKind::Heading) {
            prop_assert_eq!(block.lines.len(), 1);
        }
    }

    #[test]
    fn lines_are_the_input_without_blank_lines(text in doc_text()) {
        let expected: String = text
            .split_inclusive('\n')
            .filter(|line| !is_blank(line))
            .collect();
        prop_assert_eq!(segment(&text).to_text(), expected);
    }

    #[test]
    fn preformatted_lines_are_indented_and_paragraph_lines_are_not(text in doc_text()) {
        let doc = segment(&text);
        for block in &doc {
            for line in &block.lines {
                prop_assert!(!is_blank(line));
                let indented = line.starts_with([' ', '\t']);
                prop_assert_eq!(indented, block.kind == BlockKind::Preformatted);
            }
        }
    }

    #[test]
    fn trailing_blank_line_changes_nothing(text in doc_text()) {
        let with_blank = format!("{text}\n");
        prop_assert_eq!(segment(&text), segment(&with_blank));
    }

    #[test]
    fn blank_runs_behave_like_one_blank_line(lines in prop::collection::vec(any_line(), 0..30)) {
        let single = lines.concat();
        let doubled: String = lines
            .iter()
            .map(|line| if is_blank(line) { format!("{line}\n") } else { line.clone() })
            .collect();
        prop_assert_eq!(segment(&single), segment(&doubled));
    }

    #[test]
    fn indented_line_after_text_starts_preformatted(
        first in text_line(),
        code in indented_line()
    ) {
        let text = format!("{first}{code}");
        let doc = segment(&text);
        prop_assert_eq!(doc.kinds(), vec![BlockKind::Paragraph, BlockKind::Preformatted]);
        prop_assert_eq!(doc.blocks()[1].lines.clone(), vec![code]);
    }
}
