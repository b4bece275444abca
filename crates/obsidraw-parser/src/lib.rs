//! # Obsidraw Parser
//!
//! Decoder for Obsidian Excalidraw documents (`*.excalidraw.md`). The scene
//! is stored in the markdown as a fenced `compressed-json` block (LZ-String,
//! base64) or, in older documents, a plain `json` block.
//!
//! ## Usage
//!
//! ```
//! # use obsidraw_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let scene = r#"{"type":"excalidraw","elements":[{"type":"rectangle","x":0,"y":0}]}"#;
//!     let source = format!("# Excalidraw Data\n\n{}json\n{scene}\n{}\n", "```", "```");
//!
//!     let elements = parse(&source)?;
//!     assert_eq!(elements.len(), 1);
//!     Ok(())
//! }
//! ```

mod block;
mod decompress;
mod elaborate;
pub mod error;
mod raw;
mod span;

pub use error::ParseError;
pub use span::{Span, Spanned};

use log::{debug, info, warn};

use obsidraw_core::element::DrawingElement;

use block::{Block, COMPRESSED_TAG, PLAIN_TAG};
use elaborate::Elaborator;
use error::{Diagnostic, ErrorCode};
use raw::RawDrawing;

/// Decode an Excalidraw markdown document into drawing elements.
///
/// The pipeline is:
///
/// 1. **Locate** - Find the first `compressed-json` block, else the first `json` block
/// 2. **Decompress** - Join the payload lines and LZ-String decode them (compressed blocks only)
/// 3. **Deserialize** - Parse the JSON scene
/// 4. **Elaborate** - Convert raw elements into typed [`DrawingElement`]s
///
/// A scene without an `elements` key yields an empty list. Problems with
/// individual elements are logged as warnings and never fail decoding.
///
/// # Errors
///
/// Returns a [`ParseError`] when no data block is found (E001), a block is
/// never closed (E002), decompression fails (E100, E101) or the payload is
/// not valid JSON (E102).
pub fn parse(source: &str) -> Result<Vec<DrawingElement>, ParseError> {
    let drawing = decode(source)?;

    let (elements, warnings) = Elaborator::new().elaborate(drawing);
    for warning in &warnings {
        warn!(warning:%; "Recovered from element problem");
    }

    info!(elements_count = elements.len(); "Drawing decoded");
    Ok(elements)
}

fn decode(source: &str) -> Result<RawDrawing, Diagnostic> {
    // An unterminated compressed block does not hide a plain block.
    let unterminated = match block::find_block(source, COMPRESSED_TAG) {
        Ok(Some(block)) => {
            debug!(payload_len = block.body.inner().len(); "Found compressed-json block");
            let json = decompress::decompress_payload(&block.body)?;
            return serde_json::from_str(&json).map_err(|err| {
                Diagnostic::error(format!("decompressed drawing data is not valid JSON: {err}"))
                    .with_code(ErrorCode::E102)
                    .with_label(block.body.span(), "payload decodes to invalid JSON")
            });
        }
        Ok(None) => None,
        Err(diag) => {
            debug!("compressed-json block is never closed, trying json block");
            Some(diag)
        }
    };

    match block::find_block(source, PLAIN_TAG) {
        Ok(Some(block)) => {
            debug!(payload_len = block.body.inner().len(); "Found json block");
            serde_json::from_str(block.body.inner()).map_err(|err| json_diagnostic(&block, &err))
        }
        Ok(None) => Err(unterminated.unwrap_or_else(|| {
            Diagnostic::error("no drawing data found")
                .with_code(ErrorCode::E001)
                .with_help(
                    "expected a ```compressed-json or ```json block holding the Excalidraw scene",
                )
        })),
        Err(diag) => Err(unterminated.unwrap_or(diag)),
    }
}

/// Builds an E102 diagnostic pointing at the JSON error inside a plain block.
fn json_diagnostic(block: &Block<'_>, err: &serde_json::Error) -> Diagnostic {
    let body = *block.body.inner();
    let offset = block.body.span().start() + line_column_offset(body, err.line(), err.column());
    let end = (offset + 1).min(block.body.span().end()).max(offset);

    Diagnostic::error(format!("invalid JSON in data block: {err}"))
        .with_code(ErrorCode::E102)
        .with_label(Span::new(offset..end), "here")
        .with_secondary_label(block.fence, "block opened here")
}

/// Byte offset of a 1-based line and column in `text`, clamped to a char boundary.
fn line_column_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
