use crate::{CliError, CliResult};

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type guessed from the file extension
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_MIME,
    }
}

/// Encode bytes as a `data:` URL
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a local image into a `data:` URL suitable for the set-image call
pub fn data_url_from_file(path: &Path) -> CliResult<String> {
    let bytes = std::fs::read(path).map_err(|e| CliError::image_read(path.to_path_buf(), e))?;
    Ok(encode_data_url(mime_for(path), &bytes))
}
