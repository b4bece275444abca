//! A decoded drawing ready for rendering.

use crate::{color::Color, element::DrawingElement};

/// Padding around the drawing, in pixels, when none is configured.
pub const DEFAULT_PADDING: f64 = 40.0;

/// Ordered drawing elements plus page configuration.
///
/// Element order is paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    elements: Vec<DrawingElement>,
    background: Color,
    padding: f64,
}

impl Scene {
    /// Creates a scene with a white background and the default padding.
    pub fn new(elements: Vec<DrawingElement>) -> Self {
        Self {
            elements,
            background: Color::white(),
            padding: DEFAULT_PADDING,
        }
    }

    /// Sets the page background.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the padding. Negative or non-finite values are clamped to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use obsidraw_core::scene::Scene;
    ///
    /// assert_eq!(Scene::new(vec![]).with_padding(-5.0).padding(), 0.0);
    /// assert_eq!(Scene::new(vec![]).with_padding(12.0).padding(), 12.0);
    /// ```
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        self
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
