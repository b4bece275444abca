//! Typed drawing element model.
//!
//! A [`DrawingElement`] carries the attributes shared by every Excalidraw
//! element (position, optional size, stroke, fill, deletion flag, id) and an
//! [`ElementKind`] holding the kind-specific payload.
//!
//! # Example
//!
//! ```
//! use obsidraw_core::element::{DrawingElement, ElementKind, TextAlign, TextBlock};
//! use obsidraw_core::geometry::Point;
//!
//! let label = DrawingElement::new(
//!     Point::new(10.0, 20.0),
//!     ElementKind::Text(TextBlock::new("hello").with_font_size(20.0)),
//! )
//! .with_size(40.0, 25.0);
//!
//! assert!(label.as_text().is_some());
//! assert_eq!(label.as_text().unwrap().align(), TextAlign::Start);
//! ```

use crate::{color::Fill, draw::StrokeDefinition, geometry::Point};

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Font size used for text without an explicit size.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// A single element of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingElement {
    id: Option<String>,
    position: Point,
    width: Option<f64>,
    height: Option<f64>,
    stroke: StrokeDefinition,
    fill: Fill,
    deleted: bool,
    kind: ElementKind,
}

impl DrawingElement {
    /// Creates an element of `kind` at `position` with default styling.
    pub fn new(position: Point, kind: ElementKind) -> Self {
        Self {
            id: None,
            position,
            width: None,
            height: None,
            stroke: StrokeDefinition::default(),
            fill: Fill::None,
            deleted: false,
            kind,
        }
    }

    /// Sets the element identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets both width and height.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the width alone; `None` leaves it absent.
    pub fn with_width(mut self, width: Option<f64>) -> Self {
        self.width = width;
        self
    }

    /// Sets the height alone; `None` leaves it absent.
    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the fill.
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the deletion flag.
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Top-left anchor of the element in scene coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// The far corner `(x + width, y + height)`, absent dimensions counting as zero.
    pub fn far_corner(&self) -> Point {
        self.position.add_point(Point::new(
            self.width.unwrap_or_default(),
            self.height.unwrap_or_default(),
        ))
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Returns the text payload if this is a text element.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match &self.kind {
            ElementKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the connector payload if this is an arrow or a line.
    pub fn as_connector(&self) -> Option<&Connector> {
        match &self.kind {
            ElementKind::Arrow(connector) | ElementKind::Line(connector) => Some(connector),
            _ => None,
        }
    }
}

/// Kind-specific payload of a [`DrawingElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Rectangle, optionally with rounded corners.
    Rectangle { rounded: bool },
    Ellipse,
    Text(TextBlock),
    /// Connector that may carry arrowheads.
    Arrow(Connector),
    /// Connector drawn without arrowheads.
    Line(Connector),
    /// Any kind without a renderer (`diamond`, `freedraw`, `image`, ...).
    Other(String),
}

impl ElementKind {
    /// The Excalidraw type name for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Text(_) => "text",
            Self::Arrow(_) => "arrow",
            Self::Line(_) => "line",
            Self::Other(name) => name,
        }
    }
}

/// Horizontal alignment of a text element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

impl TextAlign {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "middle",
            Self::End => "end",
        }
    }
}

impl From<&str> for TextAlign {
    fn from(value: &str) -> Self {
        match value {
            "center" => Self::Center,
            "right" | "end" => Self::End,
            _ => Self::Start,
        }
    }
}

/// Text content with its typographic settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    content: String,
    font_size: Option<f64>,
    align: TextAlign,
}

impl TextBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: None,
            align: TextAlign::Start,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The declared font size, if any.
    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    /// The declared font size, or [`DEFAULT_FONT_SIZE`].
    pub fn effective_font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Content split into lines on `\n`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// Polyline geometry of an arrow or line.
///
/// Points are relative to the owning element's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connector {
    points: Vec<Point>,
    start_arrowhead: bool,
    end_arrowhead: bool,
}

impl Connector {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            start_arrowhead: false,
            end_arrowhead: false,
        }
    }

    pub fn with_start_arrowhead(mut self, enabled: bool) -> Self {
        self.start_arrowhead = enabled;
        self
    }

    pub fn with_end_arrowhead(mut self, enabled: bool) -> Self {
        self.end_arrowhead = enabled;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn has_start_arrowhead(&self) -> bool {
        self.start_arrowhead
    }

    pub fn has_end_arrowhead(&self) -> bool {
        self.end_arrowhead
    }
}
