//! Error types

mod api;
mod decode;

pub use api::*;
pub use decode::*;

/// Top-level error returned by client and view operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed or the server rejected it.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not have the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The request was rejected before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Returns `true` if this is a response decoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the HTTP status code if the server answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }
}
