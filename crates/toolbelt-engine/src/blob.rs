//! File/base64 bridging: data URIs and blob decoding.
//!
//! The MIME type and file extension come from magic-byte sniffing, with
//! `application/octet-stream` / `bin` fallbacks for unrecognized content.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Build an RFC 2397 data URI from raw bytes.
pub fn data_uri(bytes: &[u8]) -> String {
    let mime = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream");
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a file and encode it as a data URI.
pub fn file_to_data_uri(path: &Path) -> Result<String, BlobError> {
    let bytes = fs::read(path)?;
    Ok(data_uri(&bytes))
}

/// Decode base64 (raw or a full data URI) into bytes plus a suggested file
/// extension sniffed from the decoded content.
pub fn decode_blob(input: &str) -> Result<(Vec<u8>, &'static str), BlobError> {
    let payload = input.trim();
    let payload = match payload.split_once(',') {
        Some((head, rest)) if head.starts_with("data:") => rest,
        _ => payload,
    };

    let bytes = STANDARD.decode(payload)?;
    let extension = infer::get(&bytes)
        .map(|kind| kind.extension())
        .unwrap_or("bin");
    Ok((bytes, extension))
}
