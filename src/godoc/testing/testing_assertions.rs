//! Fluent assertion API for documents

use crate::godoc::ast::{Block, BlockKind, Document};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks in the document
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {} blocks: [{}]",
            expected,
            actual,
            summarize_blocks(self.doc)
        );
        self
    }

    /// Assert the document has no blocks
    pub fn is_empty(self) -> Self {
        self.block_count(0)
    }

    /// Assert the kinds of all blocks, in order
    pub fn kinds(self, expected: &[BlockKind]) -> Self {
        assert_eq!(
            self.doc.kinds(),
            expected,
            "Block kinds differ: [{}]",
            summarize_blocks(self.doc)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.len(),
            "Block index {} out of bounds (document has {} blocks)",
            index,
            self.doc.len()
        );

        assertion(BlockAssertion {
            block: &self.doc.blocks()[index],
            context: format!("blocks[{}]", index),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn assert_paragraph(self) -> Self {
        self.assert_kind(BlockKind::Paragraph)
    }

    pub fn assert_heading(self) -> Self {
        self.assert_kind(BlockKind::Heading)
    }

    pub fn assert_preformatted(self) -> Self {
        self.assert_kind(BlockKind::Preformatted)
    }

    fn assert_kind(self, expected: BlockKind) -> Self {
        assert_eq!(
            self.block.kind,
            expected,
            "{}: Expected {}, found {} with lines {:?}",
            self.context,
            expected,
            self.block.kind,
            self.block.lines
        );
        self
    }

    /// Assert the exact lines, terminators included
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.block.lines, expected,
            "{}: Lines mismatch",
            self.context
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.line_count(),
            expected,
            "{}: Expected {} lines, found {:?}",
            self.context,
            expected,
            self.block.lines
        );
        self
    }

    /// Assert the concatenated text of the block
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.block.text(), expected, "{}: Text mismatch", self.context);
        self
    }
}

fn summarize_blocks(doc: &Document) -> String {
    doc.iter()
        .map(|b| format!("{}({})", b.kind, b.line_count()))
        .collect::<Vec<_>>()
        .join(", ")
}
