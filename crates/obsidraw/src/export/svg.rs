//! SVG file output.

use std::path::{Path, PathBuf};

use log::info;

use obsidraw_core::draw::RenderedDocument;

use super::{Error, Exporter};

/// Writes the rendered document as an SVG file.
#[derive(Debug, Clone)]
pub struct SvgFile {
    path: PathBuf,
}

impl SvgFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for SvgFile {
    fn export_document(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        ::svg::save(&self.path, &document.to_svg_document())?;
        info!(path:? = self.path; "SVG written");
        Ok(())
    }
}
