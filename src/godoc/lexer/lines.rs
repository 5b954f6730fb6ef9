//! Line grouping and classification
//!
//!     The segmenter works on lines, not tokens. This module folds the flat token stream
//!     into lines, each keeping the exact source slice it came from (trailing terminator
//!     included) and a classification derived from its tokens:
//!
//!         - Blank: only whitespace, or nothing at all besides the terminator
//!         - Indented: starts with whitespace and has some text
//!         - Text: starts with text
//!
//!     A final line without a terminator is still a line. No empty line is produced
//!     after a final terminator.

use std::fmt;

use super::lexer_impl::tokenize_with_spans;
use super::tokens::Token;

/// The classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Empty or whitespace only
    Blank,

    /// Leading whitespace followed by text
    Indented,

    /// Starts with text
    Text,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Blank => "BLANK_LINE",
            LineType::Indented => "INDENTED_LINE",
            LineType::Text => "TEXT_LINE",
        };
        write!(f, "{}", name)
    }
}

/// One row of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The original source slice, including its terminator if it had one
    pub text: &'a str,

    pub line_type: LineType,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.line_type == LineType::Blank
    }

    pub fn is_indented(&self) -> bool {
        self.line_type == LineType::Indented
    }

    /// The line content without its `\n` or `\r\n` terminator
    pub fn content(&self) -> &'a str {
        strip_terminator(self.text)
    }
}

/// Strip one trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Determine the type of a line based on its tokens.
pub fn classify_line_tokens(tokens: &[Token]) -> LineType {
    if tokens.iter().all(Token::is_whitespace) {
        return LineType::Blank;
    }
    match tokens.first() {
        Some(Token::Whitespace) => LineType::Indented,
        _ => LineType::Text,
    }
}

/// Split source text into classified lines.
pub fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut line_tokens: Vec<Token> = Vec::new();
    let mut line_start = 0;

    for (token, span) in tokenize_with_spans(source) {
        line_tokens.push(token);
        if token.is_newline() {
            lines.push(Line {
                text: &source[line_start..span.end],
                line_type: classify_line_tokens(&line_tokens),
            });
            line_tokens.clear();
            line_start = span.end;
        }
    }

    if line_start < source.len() {
        lines.push(Line {
            text: &source[line_start..],
            line_type: classify_line_tokens(&line_tokens),
        });
    }

    lines
}
