//! Geometric primitives for drawing bounds and placement.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//! - [`BoundingBox`] - The extent of a set of elements
//!
//! # Coordinate System
//!
//! Drawings use the Excalidraw scene coordinate system, which matches SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Scene coordinates may be negative; the renderer translates them into the
//! canvas.

/// A 2D point in drawing coordinate space.
///
/// # Examples
///
/// ```
/// # use obsidraw_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// let offset = Point::new(5.0, -5.0);
///
/// let moved = origin.add_point(offset);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Direction of the vector from `from` to `self`, in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use obsidraw_core::geometry::Point;
    /// let angle = Point::new(10.0, 0.0).angle_from(Point::new(0.0, 0.0));
    /// assert_eq!(angle, 0.0);
    /// ```
    pub fn angle_from(self, from: Point) -> f64 {
        let delta = self.sub_point(from);
        delta.y.atan2(delta.x)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified width and height
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Grows the size by `padding` on every side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use obsidraw_core::geometry::Size;
    /// let padded = Size::new(800.0, 600.0).add_padding(40.0);
    /// assert_eq!(padded.width(), 880.0);
    /// assert_eq!(padded.height(), 680.0);
    /// ```
    pub fn add_padding(self, padding: f64) -> Self {
        Self {
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// The rectangular extent of a set of drawing elements.
///
/// Every field is finite. `width` and `height` are stored alongside the
/// corners because the fallback for a non-finite extent is applied to each
/// field independently (see [`crate::bounds::compute_bounds`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    /// Default extent used when nothing contributes to the bounds.
    pub const DEFAULT_WIDTH: f64 = 800.0;
    /// Default extent used when nothing contributes to the bounds.
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    /// Builds a box from its corners, computing width and height.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Builds a box from raw running extents, replacing every non-finite
    /// field with the corresponding field of [`BoundingBox::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use obsidraw_core::geometry::BoundingBox;
    /// let bounds = BoundingBox::from_extents(
    ///     f64::INFINITY,
    ///     f64::INFINITY,
    ///     f64::NEG_INFINITY,
    ///     f64::NEG_INFINITY,
    /// );
    /// assert_eq!(bounds, BoundingBox::default());
    /// ```
    pub fn from_extents(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let fallback = Self::default();
        let min_x = finite_or(min_x, fallback.min_x);
        let min_y = finite_or(min_y, fallback.min_y);
        let max_x = finite_or(max_x, fallback.max_x);
        let max_y = finite_or(max_y, fallback.max_y);

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: finite_or(max_x - min_x, fallback.width),
            height: finite_or(max_y - min_y, fallback.height),
        }
    }

    /// Returns the minimum x-coordinate
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the width of the box
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the box
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the top-left corner
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the box dimensions as a [`Size`]
    pub fn to_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: Self::DEFAULT_WIDTH,
            max_y: Self::DEFAULT_HEIGHT,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.5, -3.0);
        assert_eq!(point.x(), 10.5);
        assert_eq!(point.y(), -3.0);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(5.0, 15.0);

        let sum = p1.add_point(p2);
        assert_eq!(sum, Point::new(15.0, 35.0));

        let diff = p1.sub_point(p2);
        assert_eq!(diff, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_angle_from() {
        let origin = Point::default();
        assert_approx_eq!(f64, Point::new(10.0, 0.0).angle_from(origin), 0.0);
        assert_approx_eq!(
            f64,
            Point::new(0.0, 10.0).angle_from(origin),
            std::f64::consts::FRAC_PI_2
        );
        assert_approx_eq!(
            f64,
            Point::new(-10.0, 0.0).angle_from(origin),
            std::f64::consts::PI
        );
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(100.0, 50.0).add_padding(10.0);
        assert_eq!(size.width(), 120.0);
        assert_eq!(size.height(), 70.0);
    }

    #[test]
    fn test_bounding_box_default() {
        let bounds = BoundingBox::default();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_x(), 800.0);
        assert_eq!(bounds.max_y(), 600.0);
        assert_eq!(bounds.width(), 800.0);
        assert_eq!(bounds.height(), 600.0);
    }

    #[test]
    fn test_bounding_box_from_corners() {
        let bounds = BoundingBox::from_corners(Point::new(-10.0, 5.0), Point::new(30.0, 25.0));
        assert_eq!(bounds.width(), 40.0);
        assert_eq!(bounds.height(), 20.0);
        assert_eq!(bounds.min_point(), Point::new(-10.0, 5.0));
        assert_eq!(bounds.to_size(), Size::new(40.0, 20.0));
    }

    #[test]
    fn test_bounding_box_from_extents_partial_fallback() {
        // Finite minimum with infinite maximum keeps the minimum.
        let bounds = BoundingBox::from_extents(50.0, 60.0, f64::NEG_INFINITY, 70.0);
        assert_eq!(bounds.min_x(), 50.0);
        assert_eq!(bounds.max_x(), 800.0);
        assert_eq!(bounds.width(), 750.0);
        assert_eq!(bounds.height(), 10.0);
    }

    #[test]
    fn test_bounding_box_from_extents_nan() {
        let bounds = BoundingBox::from_extents(f64::NAN, 0.0, 10.0, f64::NAN);
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_y(), 600.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 600.0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 5.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
        assert!(!bounds.contains(Point::new(5.0, -0.1)));
    }
}
