use base64::Engine;

/// Why inline content could not be turned into text.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode base64 file content from a listing response into UTF-8 text.
pub fn decode_base64_text(encoded: &str) -> Result<String, DecodeError> {
    // GitHub wraps the payload at 60 columns
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = base64::engine::general_purpose::STANDARD.decode(cleaned)?;

    Ok(String::from_utf8(bytes)?)
}
