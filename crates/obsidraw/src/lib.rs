//! Obsidraw - Render Obsidian Excalidraw drawings to SVG and PNG.
//!
//! Decoding, rendering and rasterization for `*.excalidraw.md` documents
//! written by the Obsidian Excalidraw plugin. Shapes, text and connectors
//! are drawn with plain strokes; the hand-drawn jitter of Excalidraw is not
//! reproduced.

pub mod config;
pub mod export;
pub mod font;
pub mod raster;
pub mod render;

mod error;

pub use obsidraw_core::{bounds, color, draw, element, filter, geometry, scene};

pub use error::ObsidrawError;

use log::{debug, info, trace};

use config::AppConfig;
use draw::{FontPayload, RenderedDocument};
use export::Exporter;
use font::FontResolver;
use raster::RasterOptions;
use scene::Scene;

/// Builder for decoding and rendering Excalidraw drawings.
///
/// Holds the configuration and the font used for every conversion, so a
/// single builder can convert many documents.
///
/// # Examples
///
/// ```rust,no_run
/// use obsidraw::{DrawingBuilder, config::AppConfig};
///
/// let source = std::fs::read_to_string("Drawing.excalidraw.md")
///     .expect("Failed to read drawing");
///
/// let builder = DrawingBuilder::new(AppConfig::default());
///
/// // Decode the markdown document into a scene
/// let scene = builder.parse(&source)
///     .expect("Failed to parse");
///
/// // Render the scene to SVG
/// let svg = builder.render_svg(&scene);
///
/// // Rasterize to PNG
/// let png = builder.rasterize(&svg)
///     .expect("Failed to rasterize");
/// ```
#[derive(Debug)]
pub struct DrawingBuilder {
    config: AppConfig,
    font: Option<FontResolver>,
}

impl Default for DrawingBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DrawingBuilder {
    /// Create a new drawing builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style, raster and
    ///   font settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use obsidraw::{DrawingBuilder, config::AppConfig};
    ///
    /// let builder = DrawingBuilder::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        let font = config.font().path().map(FontResolver::new);
        Self { config, font }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the handwritten font, if one can be loaded.
    ///
    /// A configured font path takes precedence over the `Virgil.woff2`
    /// file next to the executable.
    pub fn font(&self) -> Option<&FontPayload> {
        match &self.font {
            Some(resolver) => resolver.resolve(),
            None => font::resolve_font(),
        }
    }

    /// Decode an Excalidraw markdown document into a [`Scene`].
    ///
    /// Deleted elements and text elements holding block reference markers
    /// (`^id`) are removed, and the configured background and padding are
    /// applied.
    ///
    /// # Arguments
    ///
    /// * `source` - Contents of a `*.excalidraw.md` file
    ///
    /// # Errors
    ///
    /// Returns `ObsidrawError::Parse` when the document holds no decodable
    /// drawing, and `ObsidrawError::Config` when the configured background
    /// color is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use obsidraw::DrawingBuilder;
    ///
    /// let fence = "```";
    /// let source = format!(
    ///     "## Drawing\n{fence}json\n{{\"elements\":[{{\"type\":\"ellipse\",\"x\":0,\"y\":0}}]}}\n{fence}\n"
    /// );
    ///
    /// let scene = DrawingBuilder::default().parse(&source)
    ///     .expect("Failed to parse drawing");
    /// assert_eq!(scene.elements().len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<Scene, ObsidrawError> {
        info!("Decoding drawing");

        let elements = obsidraw_parser::parse(source)
            .map_err(|err| ObsidrawError::new_parse_error(err, source))?;
        let decoded_count = elements.len();

        let elements = filter::retain_visible(elements);
        info!(
            elements_count = elements.len(),
            removed_count = decoded_count - elements.len();
            "Elements filtered"
        );

        let style = self.config.style();
        let mut scene = Scene::new(elements).with_padding(style.padding());
        if let Some(background) = style.background_color().map_err(ObsidrawError::Config)? {
            scene = scene.with_background(background);
        }

        trace!(scene:?; "Scene built");
        Ok(scene)
    }

    /// Render a scene to a [`RenderedDocument`].
    pub fn render(&self, scene: &Scene) -> RenderedDocument {
        let font = self.font();
        debug!(font_embedded = font.is_some(); "Rendering scene");
        render::render(scene, font)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use obsidraw::{DrawingBuilder, scene::Scene};
    ///
    /// let svg = DrawingBuilder::default().render_svg(&Scene::default());
    /// assert!(svg.contains(r#"viewBox="0 0 880 680""#));
    /// ```
    pub fn render_svg(&self, scene: &Scene) -> String {
        let svg = self.render(scene).to_svg_string();
        info!(bytes = svg.len(); "SVG rendered successfully");
        svg
    }

    /// Raster settings derived from the configuration and the resolved font.
    pub fn raster_options(&self) -> RasterOptions {
        let options = RasterOptions::new(self.config.raster().density());
        match self.font() {
            Some(font) => options.with_font(font.clone()),
            None => options,
        }
    }

    /// Rasterize an SVG string into PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `ObsidrawError::Raster` if the SVG cannot be rasterized.
    pub fn rasterize(&self, svg: &str) -> Result<Vec<u8>, ObsidrawError> {
        Ok(raster::svg_to_png(svg, &self.raster_options())?)
    }

    /// Render a scene and hand the document to `exporter`.
    ///
    /// # Errors
    ///
    /// Returns `ObsidrawError::Raster` when a raster backend cannot convert
    /// the document and `ObsidrawError::Io` when writing fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use obsidraw::{DrawingBuilder, export::svg::SvgFile, scene::Scene};
    ///
    /// let builder = DrawingBuilder::default();
    /// builder
    ///     .export(&Scene::default(), &mut SvgFile::new("empty.svg"))
    ///     .expect("Failed to export");
    /// ```
    pub fn export<E: Exporter>(
        &self,
        scene: &Scene,
        exporter: &mut E,
    ) -> Result<(), ObsidrawError> {
        let document = self.render(scene);
        exporter.export_document(&document)?;
        Ok(())
    }
}
