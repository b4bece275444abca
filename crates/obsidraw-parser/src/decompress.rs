//! LZ-String payload decompression.

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Spanned,
};

/// Joins a wrapped payload into a single base64 string.
fn join_lines(payload: &str) -> String {
    payload.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Decompresses an LZ-String base64 payload into JSON text.
///
/// Line breaks inside the payload are ignored. An empty decompression
/// result counts as a failure.
pub(crate) fn decompress_payload(payload: &Spanned<&str>) -> Result<String, Diagnostic> {
    let joined = join_lines(payload.inner());

    let code_units = lz_str::decompress_from_base64(&joined)
        .filter(|units| !units.is_empty())
        .ok_or_else(|| {
            Diagnostic::error("failed to decompress drawing data")
                .with_code(ErrorCode::E100)
                .with_label(payload.span(), "payload is not valid LZ-String data")
                .with_help("the compressed-json block may be truncated or edited by hand")
        })?;

    String::from_utf16(&code_units).map_err(|err| {
        Diagnostic::error(format!("decompressed drawing data is not valid text: {err}"))
            .with_code(ErrorCode::E101)
            .with_label(payload.span(), "payload decodes to invalid UTF-16")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn spanned(payload: &str) -> Spanned<&str> {
        Spanned::new(payload, Span::new(0..payload.len()))
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("AB\nCD\r\nEF\n"), "ABCDEF");
    }

    #[test]
    fn test_decompress_roundtrip() {
        let json = r#"{"elements":[]}"#;
        let compressed = lz_str::compress_to_base64(json);

        let result = decompress_payload(&spanned(&compressed)).unwrap();
        assert_eq!(result, json);
    }

    #[test]
    fn test_decompress_wrapped_payload() {
        let json = r#"{"type":"excalidraw","elements":[{"type":"rectangle","x":1,"y":2}]}"#;
        let compressed = lz_str::compress_to_base64(json);
        let wrapped = compressed
            .as_bytes()
            .chunks(16)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\r\n");

        let result = decompress_payload(&spanned(&wrapped)).unwrap();
        assert_eq!(result, json);
    }

    #[test]
    fn test_decompress_empty_payload_fails() {
        let err = decompress_payload(&spanned("")).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.labels().len(), 1);
    }
}
