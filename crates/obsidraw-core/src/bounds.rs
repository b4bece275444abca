//! Bounding box computation over drawing elements.
//!
//! Text extent is estimated without font metrics: each character is taken to
//! be `0.6 × fontSize` wide and a line `1.2 × fontSize` tall, measured from
//! the element position. Only the first line counts toward the height.

use crate::{
    element::{DrawingElement, ElementKind, LINE_HEIGHT_FACTOR},
    geometry::{BoundingBox, Point},
};

/// Estimated glyph advance as a multiple of the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Character count assumed for empty text.
const EMPTY_TEXT_CHARS: usize = 10;

/// Running min/max accumulator.
#[derive(Debug)]
struct Extents {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Extents {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }

    fn extend_max(&mut self, point: Point) {
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }

    fn into_bounds(self) -> BoundingBox {
        BoundingBox::from_extents(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Computes the tight bounds of all non-deleted elements.
///
/// Each element contributes its position and far corner. Connectors add
/// every point offset by the position, and text with a font size adds its
/// estimated extent. Fields that end up non-finite (no contributions, or
/// non-finite input) fall back to [`BoundingBox::default`].
///
/// # Examples
///
/// ```
/// use obsidraw_core::bounds::compute_bounds;
/// use obsidraw_core::element::{DrawingElement, ElementKind};
/// use obsidraw_core::geometry::{BoundingBox, Point};
///
/// assert_eq!(compute_bounds(&[]), BoundingBox::default());
///
/// let rect = DrawingElement::new(Point::new(10.0, 10.0), ElementKind::Rectangle { rounded: false })
///     .with_size(100.0, 50.0);
/// let bounds = compute_bounds(&[rect]);
/// assert_eq!(bounds.width(), 100.0);
/// assert_eq!(bounds.height(), 50.0);
/// ```
pub fn compute_bounds(elements: &[DrawingElement]) -> BoundingBox {
    if elements.is_empty() {
        return BoundingBox::default();
    }

    let mut extents = Extents::new();
    for element in elements.iter().filter(|e| !e.is_deleted()) {
        let origin = element.position();
        extents.include(origin);
        extents.include(element.far_corner());

        match element.kind() {
            ElementKind::Arrow(connector) | ElementKind::Line(connector) => {
                for point in connector.points() {
                    extents.include(origin.add_point(*point));
                }
            }
            ElementKind::Text(text) => {
                if let Some(font_size) = text.font_size() {
                    // UTF-16 code units, so astral characters count twice.
                    let chars = match text.content().encode_utf16().count() {
                        0 => EMPTY_TEXT_CHARS,
                        n => n,
                    };
                    let width = chars as f64 * font_size * CHAR_WIDTH_FACTOR;
                    let height = font_size * LINE_HEIGHT_FACTOR;
                    extents.extend_max(origin.add_point(Point::new(width, height)));
                }
            }
            _ => {}
        }
    }

    extents.into_bounds()
}
