//! Element filtering applied before layout.
//!
//! Obsidian's Excalidraw plugin stores block reference markers as text
//! elements containing `^`. They are bookkeeping, not drawing content, and
//! are removed before bounds and rendering.

use crate::element::DrawingElement;

/// Character identifying an index annotation.
pub const INDEX_MARKER: char = '^';

/// Checks whether `element` is a text element holding an index annotation.
pub fn is_index_annotation(element: &DrawingElement) -> bool {
    element
        .as_text()
        .is_some_and(|text| text.content().contains(INDEX_MARKER))
}

/// Drops text elements containing [`INDEX_MARKER`], preserving order.
///
/// Every non-text element is retained regardless of its attributes.
///
/// # Examples
///
/// ```
/// use obsidraw_core::element::{DrawingElement, ElementKind, TextBlock};
/// use obsidraw_core::filter::filter_index_annotations;
/// use obsidraw_core::geometry::Point;
///
/// let elements = vec![
///     DrawingElement::new(Point::default(), ElementKind::Text(TextBlock::new("^abc123"))),
///     DrawingElement::new(Point::default(), ElementKind::Text(TextBlock::new("Title"))),
/// ];
/// let kept = filter_index_annotations(elements);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].as_text().unwrap().content(), "Title");
/// ```
pub fn filter_index_annotations(elements: Vec<DrawingElement>) -> Vec<DrawingElement> {
    elements
        .into_iter()
        .filter(|element| !is_index_annotation(element))
        .collect()
}

/// Drops index annotations and deleted elements, preserving order.
pub fn retain_visible(elements: Vec<DrawingElement>) -> Vec<DrawingElement> {
    filter_index_annotations(elements)
        .into_iter()
        .filter(|element| !element.is_deleted())
        .collect()
}
