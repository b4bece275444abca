//! Error adapter for rendering [`ObsidrawError`] with miette.
//!
//! Parse errors carry one or more [`Diagnostic`]s with spans into the
//! markdown document; each becomes its own report with source snippets.
//! Every other error becomes a single report without source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use obsidraw::ObsidrawError;
use obsidraw_parser::{Span, error::Diagnostic};

/// A single miette report for an [`ObsidrawError`].
pub enum Reportable<'a> {
    /// A parser diagnostic with the document it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// Any error without source location.
    Error(&'a ObsidrawError),
}

impl<'a> Reportable<'a> {
    /// Wraps a parser diagnostic for the document `src`.
    pub fn diagnostic(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self::Diagnostic { diag, src }
    }
}

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { diag, .. } => f.debug_tuple("Diagnostic").field(diag).finish(),
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Self::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostic { .. } => None,
            Self::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Self::Error(err) => error_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Self::Error(ObsidrawError::Config(_)) => Some(Box::new(
                "check the --bg value and the configuration file",
            )),
            Self::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Self::Diagnostic { src, .. } => Some(src as &dyn SourceCode),
            Self::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn error_code(err: &ObsidrawError) -> Option<&'static str> {
    match err {
        ObsidrawError::Io(_) => Some("obsidraw::io"),
        ObsidrawError::Parse { .. } => None,
        ObsidrawError::Config(_) => Some("obsidraw::config"),
        ObsidrawError::Raster(_) => Some("obsidraw::raster"),
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits an [`ObsidrawError`] into the reports to render.
///
/// A parse error yields one report per diagnostic, anything else a single
/// report.
pub fn to_reportables(err: &ObsidrawError) -> Vec<Reportable<'_>> {
    match err {
        ObsidrawError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::diagnostic(diag, src))
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}
