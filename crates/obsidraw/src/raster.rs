//! SVG to PNG rasterization.
//!
//! The SVG is parsed with `usvg` against the system font database, rendered
//! with `resvg` onto a `tiny-skia` pixmap and encoded as PNG. The pixmap is
//! the SVG canvas scaled by `density / 72`.

use log::{debug, info};
use thiserror::Error;

use obsidraw_core::draw::FontPayload;

/// Default output density in DPI (2x scale).
pub const DEFAULT_DENSITY: f64 = 144.0;

/// Density at which one SVG unit maps to one pixel.
pub const BASE_DENSITY: f64 = 72.0;

/// Largest pixmap, in pixels, that is allocated (16383 x 16383).
pub const MAX_PIXELS: u64 = 268_402_689;

/// Errors raised while rasterizing an SVG document.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to parse SVG: {0}")]
    SvgParse(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap (limit is {} pixels)", MAX_PIXELS)]
    PixmapAlloc { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    PngEncode(String),
}

/// Rasterization settings.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    density: f64,
    font: Option<FontPayload>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            font: None,
        }
    }
}

impl RasterOptions {
    /// Creates options for `density` DPI. Non-positive or non-finite
    /// densities fall back to the default.
    pub fn new(density: f64) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            DEFAULT_DENSITY
        };
        Self {
            density,
            font: None,
        }
    }

    /// Registers `font` with the font database used for text.
    pub fn with_font(mut self, font: FontPayload) -> Self {
        self.font = Some(font);
        self
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Pixel scale applied to the SVG canvas.
    pub fn scale(&self) -> f64 {
        self.density / BASE_DENSITY
    }
}

/// Rasterizes `svg` into PNG bytes.
///
/// # Errors
///
/// Returns [`RasterError`] when the SVG cannot be parsed, the pixmap cannot
/// be allocated or PNG encoding fails.
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    if let Some(font) = &options.font {
        opt.fontdb_mut().load_font_data(font.data().to_vec());
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;

    let scale = options.scale() as f32;
    let width = (tree.size().width() * scale).ceil().max(1.0) as u32;
    let height = (tree.size().height() * scale).ceil().max(1.0) as u32;
    debug!(width = width, height = height, scale = scale; "Allocating pixmap");

    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(RasterError::PixmapAlloc { width, height });
    }
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::PixmapAlloc { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let png = pixmap
        .encode_png()
        .map_err(|err| RasterError::PngEncode(err.to_string()))?;
    info!(width = width, height = height, bytes = png.len(); "Rasterized SVG");
    Ok(png)
}
