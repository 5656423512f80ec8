//! Text codecs: base64, hex, and comma-separated decimal byte lists.
//!
//! Each pair of functions is a direct use of a standard encode/decode
//! primitive; the only policy here is on the decode side, where surrounding
//! whitespace is tolerated and decoded bytes must form valid UTF-8 (except
//! byte lists, which decode lossily the way the original tool did).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid byte list entry {entry:?}: {source}")]
    ByteList {
        entry: String,
        source: std::num::ParseIntError,
    },
}

pub fn text_to_base64(text: &str) -> String {
    STANDARD.encode(text)
}

pub fn base64_to_text(input: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn text_to_hex(text: &str) -> String {
    hex::encode(text)
}

pub fn hex_to_text(input: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Encode text as a comma-separated list of decimal byte values,
/// e.g. `"Hi"` becomes `"72, 105"`.
pub fn text_to_byte_list(text: &str) -> String {
    text.bytes()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode a comma-separated list of decimal byte values back into text.
///
/// Entries may carry surrounding whitespace and must each fit in a byte.
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn byte_list_to_text(input: &str) -> Result<String, CodecError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let mut bytes = Vec::new();
    for entry in input.split(',') {
        let entry = entry.trim();
        let value = entry
            .parse::<u8>()
            .map_err(|source| CodecError::ByteList {
                entry: entry.to_string(),
                source,
            })?;
        bytes.push(value);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
