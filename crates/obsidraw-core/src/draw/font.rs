//! Embedded font payloads.
//!
//! A [`FontPayload`] holds the bytes of a web font together with the family
//! name it is declared under, and produces the `@font-face` rule that embeds
//! it into an SVG document as a base64 data URI.

use std::{fmt, sync::Arc};

use base64::{Engine, engine::general_purpose::STANDARD};

/// Font stack used when the handwritten font is embedded.
pub const HANDWRITTEN_FONT_STACK: &str = "'Virgil', 'Segoe Print', 'Bradley Hand', cursive";

/// Font stack used when no font payload is available.
pub const FALLBACK_FONT_STACK: &str = "Arial, sans-serif";

/// Container format of a font payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontFormat {
    #[default]
    Woff2,
    Woff,
    TrueType,
    OpenType,
}

impl FontFormat {
    /// Guesses the format from a file extension, case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "woff2" => Some(Self::Woff2),
            "woff" => Some(Self::Woff),
            "ttf" => Some(Self::TrueType),
            "otf" => Some(Self::OpenType),
            _ => None,
        }
    }

    /// The media type used in the data URI.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Woff2 => "font/woff2",
            Self::Woff => "font/woff",
            Self::TrueType => "font/ttf",
            Self::OpenType => "font/otf",
        }
    }

    /// The CSS `format()` hint.
    pub fn css_format(self) -> &'static str {
        match self {
            Self::Woff2 => "woff2",
            Self::Woff => "woff",
            Self::TrueType => "truetype",
            Self::OpenType => "opentype",
        }
    }
}

/// Raw font bytes with their logical family and format.
///
/// Bytes are shared, so cloning a payload is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct FontPayload {
    family: String,
    format: FontFormat,
    data: Arc<[u8]>,
}

impl FontPayload {
    pub fn new(family: impl Into<String>, format: FontFormat, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            family: family.into(),
            format,
            data: data.into(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The payload as a base64 `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.data)
        )
    }

    /// The `@font-face` rule declaring this payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use obsidraw_core::draw::{FontFormat, FontPayload};
    ///
    /// let font = FontPayload::new("Virgil", FontFormat::Woff2, vec![1u8, 2, 3]);
    /// let css = font.font_face_css();
    /// assert!(css.contains("font-family: 'Virgil';"));
    /// assert!(css.contains("url('data:font/woff2;base64,AQID') format('woff2')"));
    /// ```
    pub fn font_face_css(&self) -> String {
        format!(
            "@font-face {{ font-family: '{}'; src: url('{}') format('{}'); font-weight: normal; font-style: normal; }}",
            self.family,
            self.to_data_uri(),
            self.format.css_format()
        )
    }
}

impl fmt::Debug for FontPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontPayload")
            .field("family", &self.family)
            .field("format", &self.format)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The `font-family` value for text runs.
pub fn font_stack(font: Option<&FontPayload>) -> &'static str {
    match font {
        Some(_) => HANDWRITTEN_FONT_STACK,
        None => FALLBACK_FONT_STACK,
    }
}
