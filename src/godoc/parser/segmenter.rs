//! Segmenter
//!
//!     Partitions classified lines into paragraph, heading and preformatted blocks. It is a
//!     small state machine fed one line at a time:
//!
//!         - A blank line closes the open block. Runs of blank lines are absorbed.
//!         - An indented line extends an open preformatted block, or closes the open
//!           paragraph and starts a new preformatted block.
//!         - A text line extends an open paragraph, or closes the open preformatted block
//!           and starts a new paragraph.
//!
//!     Headings are not a state of their own. A paragraph becomes a heading when it is
//!     closed, if it is a single line, was opened right after a blank line (or at the start
//!     of the document), was closed by a blank line or the end of input, and passes
//!     [is_heading](super::heading::is_heading). A paragraph cut short by an indented line
//!     is introducing code and stays a paragraph.

use tracing::{debug, trace};

use super::heading::is_heading;
use crate::godoc::ast::{Block, BlockKind, Document};
use crate::godoc::lexer::{split_lines, Line, LineType};

/// What closed a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    BlankLine,
    Indentation,
    Dedent,
    EndOfInput,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Between,
    InParagraph {
        lines: Vec<String>,
        after_blank: bool,
    },
    InPreformatted {
        lines: Vec<String>,
    },
}

/// A line-at-a-time block builder.
///
/// Feed it lines with [`process_line`](Segmenter::process_line) and collect the
/// result with [`finish`](Segmenter::finish). Most callers want [`segment`].
#[derive(Debug, Default)]
pub struct Segmenter {
    state: State,
    blocks: Vec<Block>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one line.
    pub fn process_line(&mut self, line: Line<'_>) {
        match line.line_type {
            LineType::Blank => self.close(Boundary::BlankLine),
            LineType::Indented => match &mut self.state {
                State::InPreformatted { lines } => lines.push(line.text.to_string()),
                _ => {
                    self.close(Boundary::Indentation);
                    self.state = State::InPreformatted {
                        lines: vec![line.text.to_string()],
                    };
                }
            },
            LineType::Text => match &mut self.state {
                State::InParagraph { lines, .. } => lines.push(line.text.to_string()),
                State::InPreformatted { .. } => {
                    self.close(Boundary::Dedent);
                    self.state = State::InParagraph {
                        lines: vec![line.text.to_string()],
                        after_blank: false,
                    };
                }
                State::Between => {
                    self.state = State::InParagraph {
                        lines: vec![line.text.to_string()],
                        after_blank: true,
                    };
                }
            },
        }
    }

    /// Close any open block and return the document.
    pub fn finish(mut self) -> Document {
        self.close(Boundary::EndOfInput);
        Document::new(self.blocks)
    }

    fn close(&mut self, boundary: Boundary) {
        let block = match std::mem::take(&mut self.state) {
            State::Between => return,
            State::InParagraph { lines, after_blank } => {
                let kind = if qualifies_as_heading(&lines, after_blank, boundary) {
                    BlockKind::Heading
                } else {
                    BlockKind::Paragraph
                };
                Block::new(kind, lines)
            }
            State::InPreformatted { lines } => Block::new(BlockKind::Preformatted, lines),
        };
        trace!(
            kind = %block.kind,
            lines = block.lines.len(),
            ?boundary,
            "closed block"
        );
        self.blocks.push(block);
    }
}

fn qualifies_as_heading(lines: &[String], after_blank: bool, boundary: Boundary) -> bool {
    let closed_by_blank = matches!(boundary, Boundary::BlankLine | Boundary::EndOfInput);
    match lines {
        [line] => after_blank && closed_by_blank && is_heading(line),
        _ => false,
    }
}

/// Segment doc text into a document of blocks.
pub fn segment(text: &str) -> Document {
    let mut segmenter = Segmenter::new();
    for line in split_lines(text) {
        segmenter.process_line(line);
    }
    let document = segmenter.finish();
    debug!(
        bytes = text.len(),
        blocks = document.len(),
        "segmented document"
    );
    document
}
