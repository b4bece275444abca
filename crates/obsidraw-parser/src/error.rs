//! Error and diagnostic system for the Obsidraw decoder.
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, labeled source
//! locations and help text. Fatal diagnostics are wrapped in [`ParseError`]
//! and returned from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use obsidraw_parser::error::{Diagnostic, ErrorCode};
//! # use obsidraw_parser::Span;
//!
//! let fence = Span::new(120..140);
//!
//! let diag = Diagnostic::error("data block is never closed")
//!     .with_code(ErrorCode::E002)
//!     .with_label(fence, "block opened here")
//!     .with_help("add a closing ``` fence after the payload");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
