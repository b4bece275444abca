//! Error codes for the Obsidraw diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Container errors (locating the data block)
//! - `E1xx` - Payload errors (decompression and JSON)
//! - `E2xx` - Element warnings (recoverable attribute problems)

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Container Errors (E0xx)
    // =========================================================================
    /// Missing data block.
    ///
    /// The document contains neither a `compressed-json` nor a `json` block.
    E001,

    /// Unterminated data block.
    ///
    /// A data block was opened but no closing fence follows it.
    E002,

    // =========================================================================
    // Payload Errors (E1xx)
    // =========================================================================
    /// LZ-String decompression failed.
    ///
    /// The `compressed-json` payload is not valid LZ-String base64 data, or
    /// decompresses to nothing.
    E100,

    /// Invalid UTF-16 payload.
    ///
    /// Decompression produced code units that do not form valid text.
    E101,

    /// Invalid JSON.
    ///
    /// The payload text is not a valid Excalidraw scene.
    E102,

    // =========================================================================
    // Element Warnings (E2xx)
    // =========================================================================
    /// Invalid color value; the default color is used instead.
    E200,

    /// Unknown stroke style; a solid stroke is used instead.
    E201,

    /// Malformed element; the element is skipped.
    E202,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "missing data block",
            ErrorCode::E002 => "unterminated data block",
            ErrorCode::E100 => "decompression failed",
            ErrorCode::E101 => "invalid UTF-16 payload",
            ErrorCode::E102 => "invalid JSON",
            ErrorCode::E200 => "invalid color",
            ErrorCode::E201 => "unknown stroke style",
            ErrorCode::E202 => "malformed element",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
