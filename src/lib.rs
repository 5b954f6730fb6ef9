//! # doc2json
//!
//! Converts Go doc comment text (without comment markers) into a sequence of
//! typed blocks: paragraphs, headings, and preformatted sections.
//!
//! The core entry point is [`segment`]; [`processor::convert`] runs a whole
//! stdin-to-stdout style conversion.
//!
//! ## Testing
//!
//! Document assertions live in the [testing module](godoc::testing).

pub mod error;
pub mod godoc;
pub mod processor;
pub mod settings;

pub use error::{Doc2JsonError, Result};
pub use godoc::{segment, Block, BlockKind, Document};
