//! Export backends for rendered drawings.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a [`RenderedDocument`] to an output file. It is the final stage
//! of the conversion pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Markdown Document
//!     ↓ parse
//! Scene
//!     ↓ render
//! RenderedDocument
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgFile`]
//! - [`png`] - PNG output via [`png::PngFile`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. Rasterization failures are kept
//! distinct so that callers can fall back to SVG output.

/// PNG export backend.
pub mod png;
/// SVG export backend.
pub mod svg;

use obsidraw_core::draw::RenderedDocument;

use crate::raster::RasterError;

/// Abstraction for drawing export backends.
pub trait Exporter {
    /// Writes `document` in the backend's output format.
    ///
    /// The output file is written only after the document has been fully
    /// converted, so a failed export never leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Raster`] if the document cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_document(&mut self, document: &RenderedDocument) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// The SVG could not be rasterized.
    Raster(RasterError),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raster(err) => write!(f, "Raster error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Raster(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RasterError> for Error {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
