//! Client Errors

use serde::Deserialize;

/// Result type for all table operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a remote table call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Endpoint could not be turned into a URL (usually missing configuration)
    InvalidUrl(String),
    /// Request never produced a response
    Transport(String),
    /// Server answered with a non-success status
    Status { code: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
    /// Filtered update/delete matched no row
    NotFound(String),
    /// Insert succeeded but returned no representation
    EmptyResponse,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidUrl(msg) => write!(f, "Invalid endpoint: {}", msg),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Status { code, message } => write!(f, "HTTP {}: {}", code, message),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::EmptyResponse => write!(f, "Empty response"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

/// PostgREST error payload
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    details: Option<String>,
}

/// Build a `Status` error from a failed response body
pub(crate) fn status_error(code: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { message: Some(msg), details: Some(details) }) => {
            format!("{} ({})", msg, details)
        }
        Ok(ApiErrorBody { message: Some(msg), details: None }) => msg,
        _ if body.trim().is_empty() => "no response body".to_string(),
        _ => body.trim().to_string(),
    };
    Error::Status { code, message }
}
