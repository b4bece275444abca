//! Loosely-typed Excalidraw scene model, as stored in the document.
//!
//! Every element attribute is optional here; defaults and validation are
//! applied during elaboration.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level Excalidraw scene.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDrawing {
    /// Elements are kept as JSON values so that one malformed element does
    /// not reject the whole scene.
    #[serde(default)]
    pub elements: Vec<Value>,
}

/// A single scene element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawElement {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub stroke_color: Option<String>,
    pub background_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_style: Option<String>,
    pub is_deleted: Option<bool>,
    pub roundness: Option<RawRoundness>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub text_align: Option<String>,
    #[serde(deserialize_with = "lenient_points")]
    pub points: Vec<[f64; 2]>,
    pub start_arrowhead: Option<Value>,
    pub end_arrowhead: Option<Value>,
}

/// Corner rounding descriptor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRoundness {
    #[serde(rename = "type")]
    pub kind: Option<f64>,
}

/// Excalidraw `roundness.type` for proportional rounded corners.
pub(crate) const ROUNDNESS_ADAPTIVE: f64 = 3.0;

/// Accepts any JSON for `points`, keeping only `[x, y, ...]` entries whose
/// first two items are numbers.
fn lenient_points<'de, D>(deserializer: D) -> Result<Vec<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| match entry.as_array()?.as_slice() {
            [x, y, ..] => Some([x.as_f64()?, y.as_f64()?]),
            _ => None,
        })
        .collect())
}

/// JavaScript truthiness of an optional JSON value.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
