//! Elaboration from the raw scene model into typed drawing elements.
//!
//! Elaboration never fails: attributes with invalid values fall back to
//! their defaults and malformed elements are dropped, each producing a
//! warning diagnostic.

use log::{debug, trace};
use serde_json::Value;

use obsidraw_core::{
    color::{Color, Fill},
    draw::{StrokeDefinition, StrokeStyle},
    element::{Connector, DrawingElement, ElementKind, TextAlign, TextBlock},
    geometry::Point,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    raw::{ROUNDNESS_ADAPTIVE, RawDrawing, RawElement, is_truthy},
};

/// Builds typed elements from a raw scene, collecting warnings.
#[derive(Debug, Default)]
pub(crate) struct Elaborator {
    warnings: Vec<Diagnostic>,
}

impl Elaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elaborates every element of `drawing`, preserving order.
    pub fn elaborate(mut self, drawing: RawDrawing) -> (Vec<DrawingElement>, Vec<Diagnostic>) {
        let elements = drawing
            .elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| self.elaborate_value(index, value))
            .collect();
        (elements, self.warnings)
    }

    fn elaborate_value(&mut self, index: usize, value: Value) -> Option<DrawingElement> {
        match serde_json::from_value::<RawElement>(value) {
            Ok(raw) => Some(self.elaborate_element(raw)),
            Err(err) => {
                self.warnings.push(
                    Diagnostic::warning(format!("skipping malformed element #{index}: {err}"))
                        .with_code(ErrorCode::E202),
                );
                None
            }
        }
    }

    fn elaborate_element(&mut self, raw: RawElement) -> DrawingElement {
        let position = Point::new(raw.x.unwrap_or_default(), raw.y.unwrap_or_default());
        let element_ref = raw.id.as_deref().unwrap_or(raw.kind.as_str()).to_string();

        let kind = match raw.kind.as_str() {
            "rectangle" => ElementKind::Rectangle {
                rounded: raw
                    .roundness
                    .as_ref()
                    .and_then(|r| r.kind)
                    .is_some_and(|kind| kind == ROUNDNESS_ADAPTIVE),
            },
            "ellipse" => ElementKind::Ellipse,
            "text" => ElementKind::Text(Self::text_block(&raw)),
            "arrow" => ElementKind::Arrow(
                Self::connector(&raw)
                    .with_start_arrowhead(is_truthy(raw.start_arrowhead.as_ref()))
                    .with_end_arrowhead(is_truthy(raw.end_arrowhead.as_ref())),
            ),
            "line" => ElementKind::Line(Self::connector(&raw)),
            other => {
                debug!(kind = other; "Keeping element without renderer");
                ElementKind::Other(other.to_string())
            }
        };

        let stroke = self.stroke(&raw, &element_ref);
        let fill = self.fill(raw.background_color.as_deref(), &element_ref);

        let mut element = DrawingElement::new(position, kind)
            .with_width(raw.width)
            .with_height(raw.height)
            .with_stroke(stroke)
            .with_fill(fill)
            .with_deleted(raw.is_deleted.unwrap_or(false));
        if let Some(id) = raw.id {
            element = element.with_id(id);
        }

        trace!(element:?; "Elaborated element");
        element
    }

    fn text_block(raw: &RawElement) -> TextBlock {
        let mut text = TextBlock::new(raw.text.clone().unwrap_or_default())
            .with_align(TextAlign::from(raw.text_align.as_deref().unwrap_or_default()));
        // Zero and NaN sizes count as absent.
        if let Some(size) = raw.font_size.filter(|s| *s != 0.0 && !s.is_nan()) {
            text = text.with_font_size(size);
        }
        text
    }

    fn connector(raw: &RawElement) -> Connector {
        Connector::new(raw.points.iter().map(|[x, y]| Point::new(*x, *y)).collect())
    }

    fn stroke(&mut self, raw: &RawElement, element_ref: &str) -> StrokeDefinition {
        let color = match non_empty(raw.stroke_color.as_deref()) {
            None => Color::default(),
            Some(css) => Color::new(css).unwrap_or_else(|err| {
                self.warnings.push(
                    Diagnostic::warning(format!("element `{element_ref}`: {err}"))
                        .with_code(ErrorCode::E200)
                        .with_help("the stroke is drawn in black"),
                );
                Color::default()
            }),
        };

        let width = raw
            .stroke_width
            .filter(|w| *w != 0.0 && !w.is_nan())
            .unwrap_or(1.0);

        let mut stroke = StrokeDefinition::new(color, width);
        if let Some(style) = non_empty(raw.stroke_style.as_deref()) {
            match style.parse::<StrokeStyle>() {
                Ok(style) => stroke.set_style(style),
                Err(err) => self.warnings.push(
                    Diagnostic::warning(format!("element `{element_ref}`: {err}"))
                        .with_code(ErrorCode::E201)
                        .with_help("the stroke is drawn solid"),
                ),
            }
        }
        stroke
    }

    fn fill(&mut self, background: Option<&str>, element_ref: &str) -> Fill {
        Fill::from_background(non_empty(background)).unwrap_or_else(|err| {
            self.warnings.push(
                Diagnostic::warning(format!("element `{element_ref}`: {err}"))
                    .with_code(ErrorCode::E200)
                    .with_help("the shape is left unfilled"),
            );
            Fill::None
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
