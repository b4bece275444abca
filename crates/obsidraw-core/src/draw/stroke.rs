//! Stroke definitions for drawn outlines.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and dash style of an outline
//! - [`StrokeStyle`]: the Excalidraw `strokeStyle` values
//! - [`apply_stroke!`](crate::apply_stroke!): applies stroke attributes to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"#1e1e1e"` |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"8,8"`, `"1.5,6"` |
//!
//! # Example
//!
//! ```
//! use obsidraw_core::color::Color;
//! use obsidraw_core::draw::{StrokeDefinition, StrokeStyle};
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("#1e1e1e").unwrap(), 2.0);
//! stroke.set_style(StrokeStyle::Dashed);
//!
//! let line = svg_element::Polyline::new().set("points", "0,0 10,10");
//! let line = obsidraw_core::apply_stroke!(line, &stroke);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "8,8"
/// - `Dotted`: "1.5,6"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line (8px dash, 8px gap)
    Dashed,
    /// Dotted line (1.5px dot, 6px gap)
    Dotted,
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("8,8"),
            Self::Dotted => Some("1.5,6"),
        }
    }
}

/// A stroke definition for outlines, connectors and text.
///
/// The default stroke is black, 1px wide and solid.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    ///
    /// # Examples
    ///
    /// ```
    /// use obsidraw_core::color::Color;
    /// use obsidraw_core::draw::StrokeDefinition;
    ///
    /// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
    /// assert_eq!(stroke.width(), 2.0);
    /// ```
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply stroke attributes to an SVG element.
///
/// Sets `stroke` and `stroke-width`, plus `stroke-dasharray` when the style
/// is not solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();

        stroke.set_color(Color::new("#e03131").unwrap());
        stroke.set_width(4.0);
        stroke.set_style(StrokeStyle::Dotted);

        assert_eq!(stroke.color().to_string(), "#e03131");
        assert_eq!(stroke.width(), 4.0);
        assert_eq!(stroke.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("8,8"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("1.5,6"));
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>().unwrap(), StrokeStyle::Solid);
        assert_eq!("dashed".parse::<StrokeStyle>().unwrap(), StrokeStyle::Dashed);
        assert_eq!("dotted".parse::<StrokeStyle>().unwrap(), StrokeStyle::Dotted);

        let err = "wavy".parse::<StrokeStyle>().unwrap_err();
        assert!(err.contains("wavy"));
    }

    #[test]
    fn test_apply_stroke_solid() {
        let stroke = StrokeDefinition::new(Color::new("#ff0000").unwrap(), 2.0);
        let rect = apply_stroke!(svg_element::Rectangle::new(), &stroke);
        let rendered = rect.to_string();

        assert!(rendered.contains(r##"stroke="#ff0000""##));
        assert!(rendered.contains(r#"stroke-width="2""#));
        assert!(!rendered.contains("stroke-dasharray"));
    }

    #[test]
    fn test_apply_stroke_dashed() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_style(StrokeStyle::Dashed);
        let line = apply_stroke!(svg_element::Polyline::new(), &stroke);

        assert!(line.to_string().contains(r#"stroke-dasharray="8,8""#));
    }
}
