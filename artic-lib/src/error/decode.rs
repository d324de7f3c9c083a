//! Response decoding errors

/// Longest body excerpt kept on a [`DecodeError`].
const MAX_BODY_EXCERPT: usize = 512;

/// The response body was not valid JSON or did not match the expected shape.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Response decode error at line {line}, column {column}: {message}")]
pub struct DecodeError {
    /// Description from the JSON decoder (names the missing or mismatched field).
    pub message: String,
    /// Line of the offending input, 1-based.
    pub line: usize,
    /// Column of the offending input, 1-based.
    pub column: usize,
    /// Leading part of the raw body, if available.
    pub body: Option<String>,
}

impl DecodeError {
    /// Builds a decode error from a `serde_json` failure and the body that caused it.
    pub fn from_json(err: &serde_json::Error, body: &str) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
            body: Some(excerpt(body)),
        }
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= MAX_BODY_EXCERPT {
        return body.to_string();
    }
    let mut end = MAX_BODY_EXCERPT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
