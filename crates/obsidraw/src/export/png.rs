//! PNG file output.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use obsidraw_core::draw::RenderedDocument;

use super::{Error, Exporter};
use crate::raster::{self, RasterOptions};

/// Rasterizes the rendered document and writes it as a PNG file.
#[derive(Debug, Clone)]
pub struct PngFile {
    path: PathBuf,
    options: RasterOptions,
}

impl PngFile {
    pub fn new(path: impl Into<PathBuf>, options: RasterOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for PngFile {
    fn export_document(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        let png = raster::svg_to_png(&document.to_svg_string(), &self.options)?;
        fs::write(&self.path, &png)?;
        info!(path:? = self.path, bytes = png.len(); "PNG written");
        Ok(())
    }
}
