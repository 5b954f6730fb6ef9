//! AST definitions for segmented doc text
//!
//! The tree is flat: a [`Document`] is an ordered list of [`Block`]s, and each
//! block is a [`BlockKind`] plus the source lines it covers.

pub mod block;
pub mod document;

pub use block::{Block, BlockKind};
pub use document::Document;
