//! Token definitions for doc comment text
//!
//! Doc text only needs three token kinds to be segmented: line breaks, runs of
//! whitespace inside a line, and runs of anything else. Every byte of the input
//! belongs to exactly one token, so concatenating the token slices reproduces
//! the source.
use logos::Logos;

/// All possible tokens in doc comment text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Line breaks (LF or CRLF). Longer than a lone `\r` whitespace match, so CRLF wins.
    #[regex(r"\r?\n")]
    Newline,

    // Any whitespace except the line feed
    #[regex(r"[^\S\n]+")]
    Whitespace,

    // Everything else
    #[regex(r"[^\s]+")]
    Text,
}

impl Token {
    /// Check if this token is a line break
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    /// Check if this token carries no visible content
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token is text content
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}
