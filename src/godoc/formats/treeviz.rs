//! Treeviz formatter for documents
//!
//! Treeviz is a one line per block view of a document, meant for quick scanning.
//!
//! So the format is :
//! <connector><icon><space>[<line count>]<space><first line> (truncated to 40 characters)
//!
//! Example:
//!
//!   ⧉ 3 blocks
//!   ├─ ⊤ [1] Overview
//!   ├─ ¶ [2] Package http provides HTTP cl...
//!   └─ 𝒱 [3] resp, err := http.Get("http:...
//!
//! Icons
//!     Document: ⧉
//!     Paragraph: ¶
//!     Heading: ⊤
//!     Preformatted: 𝒱

use crate::godoc::ast::{Block, BlockKind, Document};
use crate::godoc::lexer::strip_terminator;

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Paragraph => "¶",
        BlockKind::Heading => "⊤",
        BlockKind::Preformatted => "𝒱",
    }
}

fn label(block: &Block) -> String {
    let first = block
        .lines
        .first()
        .map(|line| strip_terminator(line).trim_start())
        .unwrap_or_default();
    truncate(first, MAX_LABEL_CHARS)
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let noun = if doc.len() == 1 { "block" } else { "blocks" };
    let mut result = format!("⧉ {} {}\n", doc.len(), noun);
    for (i, block) in doc.iter().enumerate() {
        let connector = if i + 1 == doc.len() { "└─" } else { "├─" };
        result.push_str(&format!(
            "{} {} [{}] {}\n",
            connector,
            icon(block.kind),
            block.line_count(),
            label(block)
        ));
    }
    result
}
