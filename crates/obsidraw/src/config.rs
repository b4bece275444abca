//! Configuration types for Obsidraw conversions.
//!
//! This module provides configuration structures that control how drawings
//! are styled, rasterized and which font is embedded. All types implement
//! [`serde::Deserialize`] for loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`StyleConfig`] - Canvas background color and padding.
//! - [`RasterConfig`] - PNG density.
//! - [`FontConfig`] - An explicit handwritten font file.
//!
//! # Example
//!
//! ```
//! # use obsidraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.raster().density(), 144.0);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use obsidraw_core::{color::Color, scene::DEFAULT_PADDING};

use crate::raster::DEFAULT_DENSITY;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Raster configuration section.
    #[serde(default)]
    raster: RasterConfig,

    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `style` - Canvas styling options.
    /// * `raster` - PNG output options.
    /// * `font` - Font embedding options.
    pub fn new(style: StyleConfig, raster: RasterConfig, font: FontConfig) -> Self {
        Self {
            style,
            raster,
            font,
        }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a mutable reference to the style configuration.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Returns the raster configuration.
    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }

    /// Returns the font configuration.
    pub fn font(&self) -> &FontConfig {
        &self.font
    }
}

/// Visual styling of the output canvas.
///
/// Fields that are not set fall back to the scene defaults: a white
/// background and 40 units of padding.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`], as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Padding around the drawing bounds.
    #[serde(default)]
    padding: Option<f64>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Overrides the background color string.
    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = Some(color.into());
    }

    /// Returns the configured padding, or the default of 40.
    pub fn padding(&self) -> f64 {
        self.padding.unwrap_or(DEFAULT_PADDING)
    }

    /// Overrides the padding.
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = Some(padding);
    }
}

/// PNG rasterization settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RasterConfig {
    /// Output density in dots per inch.
    #[serde(default)]
    density: Option<f64>,
}

impl RasterConfig {
    pub fn new(density: f64) -> Self {
        Self {
            density: Some(density),
        }
    }

    /// Returns the density in DPI, 144 unless configured.
    pub fn density(&self) -> f64 {
        self.density.unwrap_or(DEFAULT_DENSITY)
    }
}

/// Font embedding settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FontConfig {
    /// Explicit font file replacing the bundled `Virgil.woff2` lookup.
    #[serde(default)]
    path: Option<PathBuf>,
}

impl FontConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
