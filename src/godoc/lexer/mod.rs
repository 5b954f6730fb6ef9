//! Lexer module for doc comment text
//!
//! This module contains the tokenization logic, including token definitions,
//! the lexer implementation, and the grouping of tokens into classified lines.

pub mod lexer_impl;
pub mod lines;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use lines::{classify_line_tokens, split_lines, strip_terminator, Line, LineType};
pub use tokens::Token;
