//! Parser module for doc comment text
//!
//! Turns classified lines into a [`Document`](crate::godoc::ast::Document).

pub mod heading;
pub mod segmenter;

pub use heading::is_heading;
pub use segmenter::{segment, Segmenter};
