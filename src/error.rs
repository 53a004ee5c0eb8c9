//! Error types shared across the crate.
//!
//! - [`FetchError`] - anything that goes wrong talking to the remote list endpoint
//! - [`AppError`] - what the application layer surfaces to its caller
//!
//! Nothing here retries or swallows errors; the caller decides what to show.

use thiserror::Error;

/// Failure of a single page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("request to artworks endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("artworks endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not the expected `{ data, pagination: { total } }` shape.
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be used to build a request.
    #[error("invalid artworks endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl FetchError {
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }
}

/// Application-level error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// User-supplied value rejected before any request was made.
    #[error("{message}: {input:?}")]
    InvalidInput { message: String, input: String },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            input: input.into(),
        }
    }

    /// Returns true for errors the UI should silently ignore.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
