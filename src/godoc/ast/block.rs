//! Block element
//!
//! A block is a maximal run of related lines classified as one of three kinds.
//! The set of kinds is closed. A block serializes as `{"Kind": ..., "Lines": [...]}`
//! with the short kind tags `p`, `h` and `pre`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "p")]
    Paragraph,

    /// A single title-like line bounded by blank lines
    #[serde(rename = "h")]
    Heading,

    /// Indented, verbatim lines (usually code)
    #[serde(rename = "pre")]
    Preformatted,
}

impl BlockKind {
    /// The short tag used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading => "h",
            BlockKind::Preformatted => "pre",
        }
    }

    /// The long, human readable name
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Preformatted => "preformatted",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed run of source lines.
///
/// Each line is the original source text including its trailing terminator.
/// Blocks built by the segmenter always hold at least one line, and a heading
/// holds exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "Kind")]
    pub kind: BlockKind,

    #[serde(rename = "Lines")]
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn paragraph<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(BlockKind::Paragraph, lines.into_iter().map(Into::into).collect())
    }

    pub fn heading(line: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading, vec![line.into()])
    }

    pub fn preformatted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            BlockKind::Preformatted,
            lines.into_iter().map(Into::into).collect(),
        )
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    pub fn is_preformatted(&self) -> bool {
        self.kind == BlockKind::Preformatted
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The concatenated source text of this block
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}
