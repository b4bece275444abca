//! Scene to vector document rendering.
//!
//! [`render`] lays a [`Scene`] out on a padded canvas and converts each
//! element into drawing primitives in document order. Rendering is a pure
//! function of its inputs: the same scene and font give the same document.

use std::f64::consts::PI;

use log::{debug, trace};

use obsidraw_core::{
    bounds::compute_bounds,
    color::Color,
    draw::{
        Ellipse, FontPayload, Polygon, Polyline, Primitive, Rect, RenderedDocument, TextRun,
        font_stack,
    },
    element::{Connector, DrawingElement, ElementKind, LINE_HEIGHT_FACTOR, TextAlign, TextBlock},
    geometry::{Point, Size},
    scene::Scene,
};

/// Corner radius of rounded rectangles.
pub const ROUNDED_CORNER_RADIUS: f64 = 8.0;

/// Length of the arrowhead sides.
pub const ARROWHEAD_SIZE: f64 = 10.0;

/// Half the opening angle of an arrowhead (30 degrees).
const ARROWHEAD_HALF_ANGLE: f64 = PI / 6.0;

/// Renders `scene` into a [`RenderedDocument`].
///
/// The canvas is the bounding box of the scene grown by the padding on
/// every side, and scene coordinates are translated so that the box's
/// minimum corner lands at `(padding, padding)`. When `font` is given it
/// is embedded and text uses the handwritten font stack.
///
/// Deleted elements, connectors with fewer than two points and element
/// kinds without a renderer produce no primitives.
///
/// # Examples
///
/// ```
/// # use obsidraw::{render::render, scene::Scene};
/// let document = render(&Scene::default(), None);
/// assert_eq!(document.canvas().width(), 880.0);
/// assert_eq!(document.canvas().height(), 680.0);
/// ```
pub fn render(scene: &Scene, font: Option<&FontPayload>) -> RenderedDocument {
    let bounds = compute_bounds(scene.elements());
    let padding = scene.padding();

    let canvas = bounds.to_size().add_padding(padding);
    let translation = Point::new(padding - bounds.min_x(), padding - bounds.min_y());
    debug!(
        width = canvas.width(),
        height = canvas.height(),
        offset_x = translation.x(),
        offset_y = translation.y();
        "Canvas computed"
    );

    let mut document = RenderedDocument::new(canvas, translation, scene.background().clone());
    if let Some(font) = font {
        document = document.with_font(font.clone());
    }

    let font_family = font_stack(font);
    for element in scene.elements().iter().filter(|e| !e.is_deleted()) {
        let primitives = render_element(element, font_family);
        if primitives.is_empty() {
            debug!(kind = element.kind().name(), id:? = element.id(); "Element skipped");
        }
        for primitive in primitives {
            document.push(primitive);
        }
    }

    trace!(primitives_count = document.primitives().len(); "Scene rendered");
    document
}

fn render_element(element: &DrawingElement, font_family: &str) -> Vec<Primitive> {
    match element.kind() {
        ElementKind::Rectangle { rounded } => vec![render_rectangle(element, *rounded)],
        ElementKind::Ellipse => vec![render_ellipse(element)],
        ElementKind::Text(text) => render_text(element, text, font_family),
        ElementKind::Arrow(connector) => render_connector(element, connector, true),
        ElementKind::Line(connector) => render_connector(element, connector, false),
        ElementKind::Other(_) => Vec::new(),
    }
}

fn element_size(element: &DrawingElement) -> Size {
    Size::new(
        element.width().unwrap_or_default(),
        element.height().unwrap_or_default(),
    )
}

fn render_rectangle(element: &DrawingElement, rounded: bool) -> Primitive {
    let radius = if rounded { ROUNDED_CORNER_RADIUS } else { 0.0 };
    let rect = Rect::new(
        element.position(),
        element_size(element),
        element.fill().clone(),
        element.stroke().clone(),
    )
    .with_corner_radius(radius);
    Primitive::Rect(rect)
}

fn render_ellipse(element: &DrawingElement) -> Primitive {
    let size = element_size(element);
    let radius_x = size.width() / 2.0;
    let radius_y = size.height() / 2.0;
    let center = element
        .position()
        .add_point(Point::new(radius_x, radius_y));

    Primitive::Ellipse(Ellipse::new(
        center,
        radius_x,
        radius_y,
        element.fill().clone(),
        element.stroke().clone(),
    ))
}

fn render_text(element: &DrawingElement, text: &TextBlock, font_family: &str) -> Vec<Primitive> {
    let font_size = text.effective_font_size();
    let line_height = font_size * LINE_HEIGHT_FACTOR;
    let position = element.position();

    // Right-aligned text keeps its x; only centered text is shifted.
    let x = match text.align() {
        TextAlign::Center => position.x() + element.width().unwrap_or_default() / 2.0,
        TextAlign::Start | TextAlign::End => position.x(),
    };

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let baseline = position.y() + font_size + index as f64 * line_height;
            Primitive::TextRun(TextRun::new(
                Point::new(x, baseline),
                line,
                font_size,
                font_family,
                text.align(),
                element.stroke().color().clone(),
            ))
        })
        .collect()
}

fn render_connector(
    element: &DrawingElement,
    connector: &Connector,
    with_arrowheads: bool,
) -> Vec<Primitive> {
    let origin = element.position();
    let points: Vec<Point> = connector
        .points()
        .iter()
        .map(|point| origin.add_point(*point))
        .collect();

    let [first, second, ..] = points.as_slice() else {
        return Vec::new();
    };
    let (first, second) = (*first, *second);
    let (last, before_last) = (points[points.len() - 1], points[points.len() - 2]);

    let color = element.stroke().color();
    let mut primitives = vec![Primitive::Polyline(Polyline::new(
        points,
        element.stroke().clone(),
    ))];

    if with_arrowheads && connector.has_end_arrowhead() {
        primitives.push(arrowhead(last, last.angle_from(before_last), color));
    }
    if with_arrowheads && connector.has_start_arrowhead() {
        primitives.push(arrowhead(first, first.angle_from(second), color));
    }
    primitives
}

/// A filled triangle with its tip at `tip`, pointing along `angle`.
fn arrowhead(tip: Point, angle: f64, color: &Color) -> Primitive {
    let back = |theta: f64| {
        Point::new(
            tip.x() - ARROWHEAD_SIZE * theta.cos(),
            tip.y() - ARROWHEAD_SIZE * theta.sin(),
        )
    };

    Primitive::Polygon(Polygon::new(
        vec![
            tip,
            back(angle - ARROWHEAD_HALF_ANGLE),
            back(angle + ARROWHEAD_HALF_ANGLE),
        ],
        color.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use obsidraw_core::{
        color::Fill,
        draw::{FontFormat, HANDWRITTEN_FONT_STACK, StrokeDefinition},
    };

    use super::*;

    fn scene(elements: Vec<DrawingElement>) -> Scene {
        Scene::new(elements)
    }

    fn polygons(document: &RenderedDocument) -> Vec<&Polygon> {
        document
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon(polygon) => Some(polygon),
                _ => None,
            })
            .collect()
    }

    fn text_runs(document: &RenderedDocument) -> Vec<&TextRun> {
        document
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::TextRun(run) => Some(run),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_scene_canvas() {
        let document = render(&scene(Vec::new()), None);

        assert_approx_eq!(f64, document.canvas().width(), 880.0);
        assert_approx_eq!(f64, document.canvas().height(), 680.0);
        assert_approx_eq!(f64, document.translation().x(), 40.0);
        assert_approx_eq!(f64, document.translation().y(), 40.0);
        assert!(document.primitives().is_empty());
    }

    #[test]
    fn test_translation_moves_min_corner_to_padding() {
        let element = DrawingElement::new(Point::new(-50.0, 30.0), ElementKind::Ellipse)
            .with_size(100.0, 20.0);
        let document = render(&scene(vec![element]).with_padding(10.0), None);

        assert_approx_eq!(f64, document.translation().x(), 60.0);
        assert_approx_eq!(f64, document.translation().y(), -20.0);
        assert_approx_eq!(f64, document.canvas().width(), 120.0);
        assert_approx_eq!(f64, document.canvas().height(), 40.0);
    }

    #[test]
    fn test_rectangle() {
        let stroke = StrokeDefinition::new(Color::new("#ff0000").unwrap(), 1.0);
        let element = DrawingElement::new(
            Point::new(10.0, 10.0),
            ElementKind::Rectangle { rounded: false },
        )
        .with_size(100.0, 50.0)
        .with_stroke(stroke);

        let document = render(&scene(vec![element]), None);
        let [Primitive::Rect(rect)] = document.primitives() else {
            panic!("expected one rect, got {:?}", document.primitives());
        };
        assert_approx_eq!(f64, rect.corner_radius(), 0.0);
        assert_eq!(rect.stroke().color().to_string(), "#ff0000");
        assert_eq!(*rect.fill(), Fill::None);
        assert_approx_eq!(f64, rect.size().width(), 100.0);
    }

    #[test]
    fn test_rounded_rectangle() {
        let element =
            DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Rectangle { rounded: true })
                .with_size(10.0, 10.0);

        let document = render(&scene(vec![element]), None);
        let [Primitive::Rect(rect)] = document.primitives() else {
            panic!("expected one rect");
        };
        assert_approx_eq!(f64, rect.corner_radius(), ROUNDED_CORNER_RADIUS);
    }

    #[test]
    fn test_ellipse_center_and_radii() {
        let element = DrawingElement::new(Point::new(10.0, 20.0), ElementKind::Ellipse)
            .with_size(100.0, 50.0);

        let document = render(&scene(vec![element]), None);
        let [Primitive::Ellipse(ellipse)] = document.primitives() else {
            panic!("expected one ellipse");
        };
        assert_eq!(ellipse.center(), Point::new(60.0, 45.0));
        assert_approx_eq!(f64, ellipse.radius_x(), 50.0);
        assert_approx_eq!(f64, ellipse.radius_y(), 25.0);
    }

    #[test]
    fn test_arrow_with_end_arrowhead() {
        let connector = Connector::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
            .with_end_arrowhead(true);
        let element = DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Arrow(connector));

        let document = render(&scene(vec![element]), None);
        assert_eq!(document.primitives().len(), 2);
        assert!(matches!(document.primitives()[0], Primitive::Polyline(_)));

        let head = polygons(&document)[0];
        let [tip, left, right] = head.points() else {
            panic!("arrowhead must be a triangle");
        };
        assert_eq!(*tip, Point::new(10.0, 0.0));
        let back_x = 10.0 - ARROWHEAD_SIZE * (PI / 6.0).cos();
        assert_approx_eq!(f64, left.x(), back_x, epsilon = 1e-9);
        assert_approx_eq!(f64, left.y(), 5.0, epsilon = 1e-9);
        assert_approx_eq!(f64, right.x(), back_x, epsilon = 1e-9);
        assert_approx_eq!(f64, right.y(), -5.0, epsilon = 1e-9);
        assert_eq!(*head.fill(), Color::default());
    }

    #[test]
    fn test_arrow_with_start_arrowhead_points_backwards() {
        let connector = Connector::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 20.0)])
            .with_start_arrowhead(true);
        let element = DrawingElement::new(Point::new(5.0, 5.0), ElementKind::Arrow(connector));

        let document = render(&scene(vec![element]), None);
        let heads = polygons(&document);
        assert_eq!(heads.len(), 1);

        let [tip, left, right] = heads[0].points() else {
            panic!("arrowhead must be a triangle");
        };
        assert_eq!(*tip, Point::new(5.0, 5.0));
        // The back vertices sit further along the shaft than the tip.
        assert!(left.y() > tip.y() && right.y() > tip.y());
    }

    #[test]
    fn test_line_never_has_arrowheads() {
        let connector = Connector::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
            .with_end_arrowhead(true);
        let element = DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Line(connector));

        let document = render(&scene(vec![element]), None);
        assert_eq!(document.primitives().len(), 1);
    }

    #[test]
    fn test_connector_points_are_offset() {
        let connector = Connector::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 0.0),
        ]);
        let element = DrawingElement::new(Point::new(100.0, 200.0), ElementKind::Line(connector));

        let document = render(&scene(vec![element]), None);
        let [Primitive::Polyline(polyline)] = document.primitives() else {
            panic!("expected one polyline");
        };
        assert_eq!(
            polyline.points(),
            &[
                Point::new(100.0, 200.0),
                Point::new(110.0, 205.0),
                Point::new(120.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_short_connector_skipped() {
        let connector = Connector::new(vec![Point::new(0.0, 0.0)]).with_end_arrowhead(true);
        let element = DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Arrow(connector));

        let document = render(&scene(vec![element]), None);
        assert!(document.primitives().is_empty());
    }

    #[test]
    fn test_other_and_deleted_skipped() {
        let other = DrawingElement::new(
            Point::new(0.0, 0.0),
            ElementKind::Other("freedraw".to_string()),
        );
        let deleted = DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Ellipse)
            .with_size(10.0, 10.0)
            .with_deleted(true);

        let document = render(&scene(vec![other, deleted]), None);
        assert!(document.primitives().is_empty());
    }

    #[test]
    fn test_multiline_text_baselines() {
        let text = TextBlock::new("a\nb").with_font_size(16.0);
        let element = DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Text(text));

        let document = render(&scene(vec![element]), None);
        let runs = text_runs(&document);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].content(), "a");
        assert_eq!(runs[1].content(), "b");
        assert_approx_eq!(f64, runs[0].position().y(), 16.0);
        assert_approx_eq!(
            f64,
            runs[1].position().y() - runs[0].position().y(),
            19.2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_text_default_font_size() {
        let element = DrawingElement::new(
            Point::new(0.0, 10.0),
            ElementKind::Text(TextBlock::new("x")),
        );

        let document = render(&scene(vec![element]), None);
        let runs = text_runs(&document);
        assert_approx_eq!(f64, runs[0].font_size(), 16.0);
        assert_approx_eq!(f64, runs[0].position().y(), 26.0);
    }

    #[test]
    fn test_text_alignment() {
        let make = |align| {
            DrawingElement::new(
                Point::new(10.0, 0.0),
                ElementKind::Text(TextBlock::new("x").with_align(align)),
            )
            .with_size(40.0, 20.0)
        };

        let document = render(
            &scene(vec![
                make(TextAlign::Start),
                make(TextAlign::Center),
                make(TextAlign::End),
            ]),
            None,
        );
        let runs = text_runs(&document);
        assert_approx_eq!(f64, runs[0].position().x(), 10.0);
        assert_approx_eq!(f64, runs[1].position().x(), 30.0);
        assert_approx_eq!(f64, runs[2].position().x(), 10.0);
        assert_eq!(runs[1].anchor(), TextAlign::Center);
        assert_eq!(runs[2].anchor(), TextAlign::End);
    }

    #[test]
    fn test_text_fill_is_stroke_color() {
        let stroke = StrokeDefinition::new(Color::new("#e03131").unwrap(), 1.0);
        let element = DrawingElement::new(
            Point::new(0.0, 0.0),
            ElementKind::Text(TextBlock::new("x")),
        )
        .with_stroke(stroke);

        let document = render(&scene(vec![element]), None);
        assert_eq!(text_runs(&document)[0].fill().to_string(), "#e03131");
    }

    #[test]
    fn test_font_selects_family_and_embeds() {
        let element = DrawingElement::new(
            Point::new(0.0, 0.0),
            ElementKind::Text(TextBlock::new("x")),
        );
        let font = FontPayload::new("Virgil", FontFormat::Woff2, vec![1u8, 2, 3]);

        let with_font = render(&scene(vec![element.clone()]), Some(&font));
        assert_eq!(text_runs(&with_font)[0].font_family(), HANDWRITTEN_FONT_STACK);
        assert!(with_font.font().is_some());

        let without_font = render(&scene(vec![element]), None);
        assert_eq!(text_runs(&without_font)[0].font_family(), "Arial, sans-serif");
        assert!(without_font.font().is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let elements = vec![
            DrawingElement::new(Point::new(0.0, 0.0), ElementKind::Ellipse).with_size(5.0, 5.0),
            DrawingElement::new(
                Point::new(3.0, 4.0),
                ElementKind::Text(TextBlock::new("<hi>")),
            ),
        ];
        let scene = scene(elements);

        assert_eq!(
            render(&scene, None).to_svg_string(),
            render(&scene, None).to_svg_string()
        );
    }
}
