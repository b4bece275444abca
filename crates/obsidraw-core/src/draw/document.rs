//! The rendered vector document.

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{FontPayload, Primitive},
    geometry::{Point, Size},
};

/// The output of the scene renderer.
///
/// Holds the canvas size, the translation applied to every primitive, the
/// page background, the embedded font (if any) and the primitives in paint
/// order. Serialization is a pure function of these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    canvas: Size,
    translation: Point,
    background: Color,
    font: Option<FontPayload>,
    primitives: Vec<Primitive>,
}

impl RenderedDocument {
    pub fn new(canvas: Size, translation: Point, background: Color) -> Self {
        Self {
            canvas,
            translation,
            background,
            font: None,
            primitives: Vec::new(),
        }
    }

    /// Embeds `font` with an `@font-face` rule.
    pub fn with_font(mut self, font: FontPayload) -> Self {
        self.font = Some(font);
        self
    }

    /// Appends a primitive on top of the existing ones.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Offset from scene coordinates to canvas coordinates.
    pub fn translation(&self) -> Point {
        self.translation
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn font(&self) -> Option<&FontPayload> {
        self.font.as_ref()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Builds the SVG document tree.
    pub fn to_svg_document(&self) -> svg::Document {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let mut doc = svg::Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(font) = &self.font {
            let style = svg_element::Style::new(font.font_face_css()).set("type", "text/css");
            doc = doc.add(svg_element::Definitions::new().add(style));
        }

        let background = svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", &self.background);
        doc = doc.add(background);

        let mut content = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                self.translation.x(),
                self.translation.y()
            ),
        );
        for primitive in &self.primitives {
            content = content.add(primitive.to_svg_node());
        }

        doc.add(content)
    }

    /// Serializes the document to an SVG string.
    pub fn to_svg_string(&self) -> String {
        self.to_svg_document().to_string()
    }
}
