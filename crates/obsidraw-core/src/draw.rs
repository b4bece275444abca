//! Drawing primitives and the rendered document.
//!
//! The renderer lowers a scene into a flat, ordered list of [`Primitive`]s
//! wrapped in a [`RenderedDocument`], which serializes to SVG in one pass.

mod document;
mod font;
mod primitive;
mod stroke;

pub use document::RenderedDocument;
pub use font::{FALLBACK_FONT_STACK, FontFormat, FontPayload, HANDWRITTEN_FONT_STACK, font_stack};
pub use primitive::{Ellipse, Polygon, Polyline, Primitive, Rect, TextRun, escape_xml};
pub use stroke::{StrokeDefinition, StrokeStyle};
