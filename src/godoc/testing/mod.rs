//! Testing utilities for segmented documents
//!
//! Tests should assert on whole documents through [`assert_doc`] rather than
//! poking at block vectors by hand, so that failures name the block that broke:
//!
//! ```rust,ignore
//! let doc = segment("Overview\n\nText.\n");
//! assert_doc(&doc)
//!     .block_count(2)
//!     .block(0, |b| { b.assert_heading().lines(&["Overview\n"]); });
//! ```

mod testing_assertions;

pub use testing_assertions::{assert_doc, BlockAssertion, DocumentAssertion};
