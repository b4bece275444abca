//! Vector primitives emitted by the renderer.
//!
//! Each primitive owns fully resolved geometry and paint, and converts to a
//! single SVG node with [`Primitive::to_svg_node`].

use svg::{self, node::Blob, node::element as svg_element};

use crate::{
    apply_stroke,
    color::{Color, Fill},
    draw::StrokeDefinition,
    element::TextAlign,
    geometry::{Point, Size},
};

/// Escapes the five XML special characters.
///
/// # Examples
///
/// ```
/// use obsidraw_core::draw::escape_xml;
///
/// assert_eq!(escape_xml(r#"<a & 'b' "c">"#), "&lt;a &amp; &apos;b&apos; &quot;c&quot;&gt;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A drawing primitive in canvas paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Polygon(Polygon),
    TextRun(TextRun),
}

impl Primitive {
    /// Converts the primitive to its SVG node.
    pub fn to_svg_node(&self) -> Box<dyn svg::Node> {
        match self {
            Self::Rect(rect) => Box::new(rect.to_svg()),
            Self::Ellipse(ellipse) => Box::new(ellipse.to_svg()),
            Self::Polyline(polyline) => Box::new(polyline.to_svg()),
            Self::Polygon(polygon) => Box::new(polygon.to_svg()),
            Self::TextRun(text) => Box::new(text.to_svg()),
        }
    }
}

/// An axis-aligned rectangle with optional corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    position: Point,
    size: Size,
    corner_radius: f64,
    fill: Fill,
    stroke: StrokeDefinition,
}

impl Rect {
    pub fn new(position: Point, size: Size, fill: Fill, stroke: StrokeDefinition) -> Self {
        Self {
            position,
            size,
            corner_radius: 0.0,
            fill,
            stroke,
        }
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn to_svg(&self) -> svg_element::Rectangle {
        let rect = svg_element::Rectangle::new()
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.corner_radius)
            .set("fill", self.fill.to_svg_value());
        apply_stroke!(rect, &self.stroke)
    }
}

/// An ellipse given by center and radii.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point,
    radius_x: f64,
    radius_y: f64,
    fill: Fill,
    stroke: StrokeDefinition,
}

impl Ellipse {
    pub fn new(
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Fill,
        stroke: StrokeDefinition,
    ) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            fill,
            stroke,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn to_svg(&self) -> svg_element::Ellipse {
        let ellipse = svg_element::Ellipse::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("rx", self.radius_x)
            .set("ry", self.radius_y)
            .set("fill", self.fill.to_svg_value());
        apply_stroke!(ellipse, &self.stroke)
    }
}

/// An open, unfilled stroked path through a sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    stroke: StrokeDefinition,
}

impl Polyline {
    pub fn new(points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self { points, stroke }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn to_svg(&self) -> svg_element::Polyline {
        let polyline = svg_element::Polyline::new()
            .set("points", format_points(&self.points))
            .set("fill", "none");
        apply_stroke!(polyline, &self.stroke)
    }
}

/// A closed, filled polygon without outline. Used for arrowheads.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    fill: Color,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Color) -> Self {
        Self { points, fill }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    fn to_svg(&self) -> svg_element::Polygon {
        svg_element::Polygon::new()
            .set("points", format_points(&self.points))
            .set("fill", &self.fill)
    }
}

/// A single line of text positioned at its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    position: Point,
    content: String,
    font_size: f64,
    font_family: String,
    anchor: TextAlign,
    fill: Color,
}

impl TextRun {
    pub fn new(
        position: Point,
        content: impl Into<String>,
        font_size: f64,
        font_family: impl Into<String>,
        anchor: TextAlign,
        fill: Color,
    ) -> Self {
        Self {
            position,
            content: content.into(),
            font_size,
            font_family: font_family.into(),
            anchor,
            fill,
        }
    }

    /// Anchor point; `y` is the baseline.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Unescaped text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn anchor(&self) -> TextAlign {
        self.anchor
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    fn to_svg(&self) -> svg_element::Text {
        // Content is escaped here and added as a blob so it is written verbatim.
        svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", &self.fill)
            .set("text-anchor", self.anchor.to_svg_value())
            .add(Blob::new(escape_xml(&self.content)))
    }
}
