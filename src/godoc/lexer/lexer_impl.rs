//! Implementation of the doc text lexer
//!
//! This module provides convenience functions for tokenizing doc text.
//! The actual tokenization is handled entirely by logos.

use crate::godoc::lexer::tokens::Token;
use logos::Logos;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans.
///
/// The token rules cover every character, so the spans are contiguous and
/// together cover the whole source. Should logos ever report an error slice it
/// is kept as `Text` so that no input byte is lost.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Text);
        tokens.push((token, lexer.span()));
    }

    tokens
}
