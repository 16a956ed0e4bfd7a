//! Error types shared by every stage of the route search pipeline.

use reqwest::StatusCode;

/// Failure raised by route parsing, encoding, searching, or the caller-side checks around them.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("unsupported route format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to parse route file: {0}")]
    Parse(String),

    #[error("place search rejected the credential ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    #[error("place search rejected the request ({status}): {body}")]
    BadRequest { status: StatusCode, body: String },

    #[error("place search failed: {0}")]
    Transport(String),

    #[error("failed to encode route: {0}")]
    Encode(String),

    #[error("route must have at least 2 points, got {points}")]
    RouteTooShort { points: usize },

    #[error("search query is empty")]
    EmptyQuery,

    #[error("no API credential supplied")]
    MissingCredential,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write results: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        ScoutError::Transport(err.to_string())
    }
}

impl From<gpx::errors::GpxError> for ScoutError {
    fn from(err: gpx::errors::GpxError) -> Self {
        ScoutError::Parse(err.to_string())
    }
}

impl From<quick_xml::Error> for ScoutError {
    fn from(err: quick_xml::Error) -> Self {
        ScoutError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
