//! XML-like tag serialization
//!
//! Serializes a document to an XML-like format that directly reflects its structure.
//!
//! ## Format
//!
//! - Block kind → tag name (`paragraph`, `heading`, `preformatted`)
//! - Each line → a `<line>` element, without its terminator
//! - Text is XML escaped; leading indentation of preformatted lines is kept
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <heading><line>Overview</line></heading>
//!   <paragraph><line>Call Run to start.</line></paragraph>
//!   <preformatted><line>	Run()</line></preformatted>
//! </document>
//! ```

use crate::godoc::ast::{Block, Document};
use crate::godoc::lexer::strip_terminator;

/// Serialize a document to tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for block in doc {
        serialize_block(block, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_block(block: &Block, output: &mut String) {
    let tag = block.kind.name();
    output.push_str(&format!("  <{}>", tag));
    for line in &block.lines {
        output.push_str("<line>");
        output.push_str(&escape_xml(strip_terminator(line)));
        output.push_str("</line>");
    }
    output.push_str(&format!("</{}>\n", tag));
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::godoc::parser::segment;

    #[test]
    fn test_empty_document() {
        assert_eq!(
            serialize_document(&Document::default()),
            "<document>\n</document>"
        );
    }

    #[test]
    fn test_blocks() {
        let doc = segment("Overview\n\nSee a < b.\n\n\tif a < b {\n\t}\n");
        assert_eq!(
            serialize_document(&doc),
            "<document>\n\
             \x20\x20<heading><line>Overview</line></heading>\n\
             \x20\x20<paragraph><line>See a &lt; b.</line></paragraph>\n\
             \x20\x20<preformatted><line>\tif a &lt; b {</line><line>\t}</line></preformatted>\n\
             </document>"
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & \"b\" 'c'"), "a &amp; &quot;b&quot; &apos;c&apos;");
    }
}
