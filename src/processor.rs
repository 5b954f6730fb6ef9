//! Conversion API
//!
//! Wires the pieces together for a single batch conversion: read all input,
//! segment it, serialize the document, and write it out. The binary is a thin
//! wrapper around [`convert`].

use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::error::{Doc2JsonError, Result};
use crate::godoc::formats::serialize_document;
use crate::godoc::segment;
use crate::settings::OutputConfig;

/// Read all of `input` and decode it as UTF-8.
pub fn read_input<R: Read>(mut input: R) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(Doc2JsonError::Input)?;
    debug!(bytes = text.len(), "read input");
    Ok(text)
}

/// Segment `text` and render it according to `options`.
pub fn render(text: &str, options: &OutputConfig) -> Result<String> {
    let document = segment(text);
    let mut output = serialize_document(&document, options.format)?;
    if options.trailing_newline {
        output.push('\n');
    }
    debug!(format = %options.format, bytes = output.len(), "rendered document");
    Ok(output)
}

/// Write all of `bytes`, reporting a writer that stops accepting data as a short write.
pub fn write_output<W: Write>(mut output: W, bytes: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < bytes.len() {
        match output.write(&bytes[written..]) {
            Ok(0) => {
                return Err(Doc2JsonError::ShortWrite {
                    written,
                    expected: bytes.len(),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(Doc2JsonError::Output(e)),
        }
    }
    output.flush().map_err(Doc2JsonError::Output)?;
    debug!(bytes = written, "wrote output");
    Ok(())
}

/// Run a full conversion from `input` to `output`.
pub fn convert<R: Read, W: Write>(input: R, output: W, options: &OutputConfig) -> Result<()> {
    let text = read_input(input)?;
    let rendered = render(&text, options)?;
    write_output(output, rendered.as_bytes())
}
