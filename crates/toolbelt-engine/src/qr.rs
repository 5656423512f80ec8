//! QR code generation rendered as unicode half blocks.

use qrcode::QrCode;
use qrcode::render::unicode;
use qrcode::types::QrError;

/// Encode `data` as a QR code and render it for terminal display.
///
/// Fails only when the payload exceeds QR capacity.
pub fn qr_unicode(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_nonempty_block_grid() {
        let rendered = qr_unicode("https://example.com").unwrap();
        assert!(!rendered.is_empty());
        // Unicode renderer emits half-block characters and spaces only.
        assert!(
            rendered
                .chars()
                .all(|c| matches!(c, '█' | '▀' | '▄' | ' ' | '\n'))
        );
    }

    #[test]
    fn oversized_payload_is_an_error() {
        // QR version 40 tops out below 3000 bytes.
        let huge = "x".repeat(8000);
        assert!(qr_unicode(&huge).is_err());
    }
}
