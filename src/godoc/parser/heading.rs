//! Heading heuristic
//!
//! Decides whether a lone line reads as a title rather than as a sentence. The
//! segmenter only asks this for one-line paragraphs that are bounded by blank lines
//! (or the document edges); this module only looks at the text.
//!
//! A heading line:
//!
//!     - starts with an uppercase letter (so it is neither empty nor indented)
//!     - ends with a letter or digit, never with punctuation
//!     - only contains letters, digits, spaces and `' - ( ) , .`
//!     - uses `'` only for a possessive `'s` followed by a space or the end
//!     - uses `.` only when a non-space follows it (`net.Conn`, `v1.2`)
//!
//! It is a heuristic. The calibration table in `tests/heading_calibration.rs` pins
//! the accepted and rejected shapes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::godoc::lexer::strip_terminator;

static HEADING_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}(?:[\p{L}\p{M}\p{N} '(),.\-]*[\p{L}\p{M}\p{Nd}])?$")
        .expect("heading shape pattern is valid")
});

// An apostrophe that is not the start of a possessive "'s"
static BAD_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(?:[^s]|s[^ ]|$)").expect("apostrophe pattern is valid"));

// A period that ends a sentence
static BAD_PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(?: |$)").expect("period pattern is valid"));

/// Check whether a line qualifies as a heading.
///
/// A trailing `\n` or `\r\n` is ignored.
pub fn is_heading(line: &str) -> bool {
    let line = strip_terminator(line);
    HEADING_SHAPE.is_match(line) && !BAD_APOSTROPHE.is_match(line) && !BAD_PERIOD.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert!(is_heading("Overview"));
        assert!(is_heading("Overview\n"));
        assert!(is_heading("Overview\r\n"));
    }

    #[test]
    fn test_empty_and_indented() {
        assert!(!is_heading(""));
        assert!(!is_heading("\n"));
        assert!(!is_heading(" Overview"));
        assert!(!is_heading("\tOverview"));
    }

    #[test]
    fn test_terminal_punctuation() {
        assert!(!is_heading("Hello."));
        assert!(!is_heading("Hello,"));
        assert!(!is_heading("Hello;"));
        assert!(!is_heading("Hello:"));
    }

    #[test]
    fn test_possessive() {
        assert!(is_heading("Go's Memory Model"));
        assert!(is_heading("The Gopher's"));
        assert!(!is_heading("Don't Panic"));
        assert!(!is_heading("The Gophers' Home"));
    }

    #[test]
    fn test_inner_periods() {
        assert!(is_heading("The net.Conn Interface"));
        assert!(!is_heading("Step 1. Install"));
    }
}
