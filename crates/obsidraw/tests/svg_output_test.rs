//! SVG output properties of complete conversions.

use obsidraw::{
    DrawingBuilder,
    config::{AppConfig, FontConfig, RasterConfig, StyleConfig},
};

/// A builder that never embeds a font, so output does not depend on the
/// files next to the test binary.
fn builder() -> DrawingBuilder {
    DrawingBuilder::new(AppConfig::new(
        StyleConfig::default(),
        RasterConfig::default(),
        FontConfig::new("/nonexistent/Virgil.woff2"),
    ))
}

fn convert(elements: &str) -> String {
    let fence = "```";
    let source = format!("# Drawing\n{fence}json\n{{\"elements\":[{elements}]}}\n{fence}\n");
    let builder = builder();
    let scene = builder.parse(&source).expect("Failed to parse drawing");
    builder.render_svg(&scene)
}

#[test]
fn test_empty_drawing_canvas() {
    let svg = convert("");

    assert!(svg.contains(r#"viewBox="0 0 880 680""#));
    assert!(svg.contains(r#"width="880""#));
    assert!(svg.contains(r#"height="680""#));
    assert!(svg.contains("translate(40, 40)"));
}

#[test]
fn test_background_precedes_content() {
    let svg = convert(r#"{"type":"ellipse","x":0,"y":0,"width":10,"height":10}"#);

    let background = svg.find(r#"height="100%""#).unwrap();
    let group = svg.find("<g").unwrap();
    let ellipse = svg.find("<ellipse").unwrap();
    assert!(background < group && group < ellipse);
}

#[test]
fn test_rectangle_attributes() {
    let svg = convert(
        r##"{"type":"rectangle","x":10,"y":10,"width":100,"height":50,"strokeColor":"#ff0000"}"##,
    );

    assert!(svg.contains(r#"rx="0""#));
    assert!(svg.contains(r##"stroke="#ff0000""##));
    assert!(svg.contains(r#"fill="none""#));
}

#[test]
fn test_arrow_emits_polyline_and_head() {
    let svg = convert(
        r#"{"type":"arrow","x":0,"y":0,"points":[[0,0],[10,0]],"startArrowhead":null,"endArrowhead":"arrow"}"#,
    );

    assert_eq!(svg.matches("<polyline").count(), 1);
    assert_eq!(svg.matches("<polygon").count(), 1);
}

#[test]
fn test_dashed_stroke() {
    let svg = convert(r#"{"type":"line","x":0,"y":0,"points":[[0,0],[10,0]],"strokeStyle":"dashed"}"#);
    assert!(svg.contains(r#"stroke-dasharray="8,8""#));
}

#[test]
fn test_text_is_escaped() {
    let svg = convert(r#"{"type":"text","x":0,"y":0,"text":"Tom & \"Jerry\" <3 'cheese'"}"#);

    assert!(svg.contains("Tom &amp; &quot;Jerry&quot; &lt;3 &apos;cheese&apos;"));
    assert!(!svg.contains("<3"));
}

#[test]
fn test_multiline_text_runs() {
    let svg = convert(r#"{"type":"text","x":0,"y":0,"text":"a\nb","fontSize":16}"#);

    assert_eq!(svg.matches("<text").count(), 2);
    assert!(svg.contains(r#"y="16""#));
    assert!(svg.contains(r#"y="35.2""#));
}

#[test]
fn test_skipped_elements_emit_nothing() {
    let svg = convert(
        r#"{"type":"freedraw","x":0,"y":0},{"type":"arrow","x":0,"y":0,"points":[[0,0]]},{"type":"ellipse","x":0,"y":0,"isDeleted":true}"#,
    );

    assert!(!svg.contains("<ellipse"));
    assert!(!svg.contains("<polyline"));
    assert!(!svg.contains("<polygon"));
}

#[test]
fn test_conversion_is_idempotent() {
    let elements = r##"{"type":"rectangle","x":-20,"y":5,"width":30,"height":30,"roundness":{"type":3},"backgroundColor":"#a5d8ff"},{"type":"text","x":0,"y":0,"text":"x","textAlign":"center","width":10}"##;
    assert_eq!(convert(elements), convert(elements));
}
