//! Error types for Obsidraw operations.
//!
//! This module provides the main error type [`ObsidrawError`] which wraps
//! the error conditions that can occur while converting a drawing.

use std::io;

use thiserror::Error;

use obsidraw_parser::error::ParseError;

use crate::raster::RasterError;

/// The main error type for Obsidraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the parser diagnostics together with the
/// markdown source, so that callers can render labeled snippets of the
/// document.
#[derive(Debug, Error)]
pub enum ObsidrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rasterization error: {0}")]
    Raster(#[from] RasterError),
}

impl From<crate::export::Error> for ObsidrawError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Raster(err) => Self::Raster(err),
            crate::export::Error::Io(err) => Self::Io(err),
        }
    }
}

impl ObsidrawError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Returns `true` if the error came from the rasterizer.
    pub fn is_raster(&self) -> bool {
        matches!(self, Self::Raster(_))
    }
}
