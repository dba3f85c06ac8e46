use super::ErrorObject;
use std::error::Error;
use std::fmt;
use tokio::io;

#[derive(Debug)]
pub enum ApiError {
    ConnectionError { source: reqwest::Error },
    IOError { source: io::Error },
    /* Scryfall reports failures as an "error" object with its own status and details, which tells the user more
     * than the bare HTTP status does.
     */
    Response { error: ErrorObject },
    SerializationError { source: serde_json::Error },
    UnexpectedObject { kind: String },
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::ConnectionError { ref source } => Some(source),
            ApiError::IOError { ref source } => Some(source),
            ApiError::SerializationError { ref source } => Some(source),
            ApiError::Response { .. } | ApiError::UnexpectedObject { .. } => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ConnectionError { source } => source.fmt(f),
            ApiError::IOError { source } => source.fmt(f),
            ApiError::Response { error } => write!(f, "API returned {} ({}): {}", error.status, error.code, error.details),
            ApiError::SerializationError { source } => source.fmt(f),
            ApiError::UnexpectedObject { kind } => write!(f, "Expected a list from the API, got \"{kind}\"."),
        }
    }
}

impl From<io::Error> for ApiError {
    fn from(error: io::Error) -> Self {
        ApiError::IOError { source: error }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::ConnectionError { source: error }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::SerializationError { source: error }
    }
}
