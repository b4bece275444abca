//! The core diagnostic type for the Obsidraw error system.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E102]: invalid JSON in data block
///   --> drawing.excalidraw.md:12:18
///    |
/// 12 |   "elements": [ {"type": }
///    |                          ^ expected value
///    |
///    = help: the json block must hold an Excalidraw scene object
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use obsidraw_parser::error::{Diagnostic, ErrorCode};
    ///
    /// let diag = Diagnostic::error("no data block found")
    ///     .with_code(ErrorCode::E001)
    ///     .with_help("save the drawing from Obsidian to regenerate it");
    /// assert_eq!(diag.to_string(), "error[E001]: no data block found");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::error("data block is never closed")
            .with_code(ErrorCode::E002)
            .with_label(Span::new(10..28), "block opened here")
            .with_secondary_label(Span::new(0..5), "document starts here");

        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("invalid JSON in data block").with_code(ErrorCode::E102);

        assert_eq!(diag.to_string(), "error[E102]: invalid JSON in data block");
    }

    #[test]
    fn test_diagnostic_display_warning() {
        let diag = Diagnostic::warning("invalid stroke color `nope`");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.to_string(), "warning: invalid stroke color `nope`");
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("no data block").with_help("re-save the drawing");

        assert_eq!(diag.help(), Some("re-save the drawing"));
    }
}
