//! Color handling for Obsidraw drawings
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! with the `DynamicColor` type from the color crate while keeping the exact
//! spelling used by the drawing, and the [`Fill`] type describing shape
//! interiors.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// The background value Excalidraw uses for shapes without a fill.
pub const TRANSPARENT: &str = "transparent";

/// A validated CSS color.
///
/// The original text is kept so that rendering emits exactly what the
/// drawing declared (`#ff0000` stays `#ff0000`).
#[derive(Clone, Debug)]
pub struct Color {
    css: String,
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use obsidraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_string(), "#ff0000");
    ///
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let css = color_str.trim();
        match DynamicColor::from_str(css) {
            Ok(color) => Ok(Self {
                css: css.to_string(),
                color,
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, the default page background.
    pub fn white() -> Self {
        Self::new("#ffffff").expect("'#ffffff' is a valid CSS color")
    }

    /// Returns the color exactly as it was written.
    pub fn as_css(&self) -> &str {
        &self.css
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The value is between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.css == other.css
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.css.hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// The interior paint of a closed shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fill {
    /// No interior paint (`fill="none"`).
    #[default]
    None,
    /// A solid color.
    Solid(Color),
}

impl Fill {
    /// Builds a fill from an Excalidraw `backgroundColor` value.
    ///
    /// An absent value and the `"transparent"` sentinel both mean no fill.
    /// Values that are not valid CSS colors are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use obsidraw_core::color::Fill;
    ///
    /// assert_eq!(Fill::from_background(None), Ok(Fill::None));
    /// assert_eq!(Fill::from_background(Some("transparent")), Ok(Fill::None));
    /// assert!(matches!(Fill::from_background(Some("#a5d8ff")), Ok(Fill::Solid(_))));
    /// ```
    pub fn from_background(value: Option<&str>) -> Result<Self, String> {
        match value.map(str::trim) {
            None | Some(TRANSPARENT) => Ok(Self::None),
            Some(css) => Color::new(css).map(Self::Solid),
        }
    }

    /// Returns the SVG `fill` attribute value.
    pub fn to_svg_value(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Solid(color) => color.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_preserves_spelling() {
        assert_eq!(Color::new("#1e1e1e").unwrap().to_string(), "#1e1e1e");
        assert_eq!(Color::new("  red ").unwrap().as_css(), "red");
        assert_eq!(
            Color::new("rgb(255, 0, 0)").unwrap().to_string(),
            "rgb(255, 0, 0)"
        );
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_white() {
        assert_eq!(Color::white().to_string(), "#ffffff");
    }

    #[test]
    fn test_color_transparent_alpha() {
        let color = Color::new(TRANSPARENT).unwrap();
        assert!(color.alpha().abs() < 0.001);
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }

    #[test]
    fn test_fill_from_background() {
        assert_eq!(Fill::from_background(None).unwrap(), Fill::None);
        assert_eq!(Fill::from_background(Some("transparent")).unwrap(), Fill::None);

        let fill = Fill::from_background(Some("#ffc9c9")).unwrap();
        assert_eq!(fill.to_svg_value(), "#ffc9c9");

        assert!(Fill::from_background(Some("nope")).is_err());
    }

    #[test]
    fn test_fill_none_svg_value() {
        assert_eq!(Fill::None.to_svg_value(), "none");
    }
}
