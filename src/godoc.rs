//! Segmentation of Go doc comment text
//!
//! The pipeline is linear:
//!
//!     text -> lexer (tokens, then classified lines) -> parser (segmenter) -> Document
//!
//! and a [`formats`] serializer turns the document into output.

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod testing;

pub use ast::{Block, BlockKind, Document};
pub use parser::segment;
