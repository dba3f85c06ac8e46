use crate::api::ApiError;
use crate::freshness::MAX_AGE_HOURS;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use tokio::io;

#[derive(Debug)]
pub enum SyncError {
    Aborted,
    ApiError { source: ApiError },
    IOError { source: io::Error },
    InvalidFileName { name: String },
    UpdatedRecently { last_update: DateTime<Utc> },
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SyncError::ApiError { ref source } => Some(source),
            SyncError::IOError { ref source } => Some(source),
            SyncError::Aborted | SyncError::InvalidFileName { .. } | SyncError::UpdatedRecently { .. } => None,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyncError::Aborted => f.write_str("Download aborted by user."),
            SyncError::ApiError { source } => source.fmt(f),
            SyncError::IOError { source } => source.fmt(f),
            SyncError::InvalidFileName { name } => {
                write!(f, "Refusing to download bulk data named {:?}, it is not a valid file name.", name)
            }
            SyncError::UpdatedRecently { last_update } => write!(
                f,
                "The bulk data was last updated at {}, within the last {} hours. You don't need to update it yet.",
                last_update.format("%Y-%m-%d %H:%M:%S UTC"),
                MAX_AGE_HOURS
            ),
        }
    }
}

impl From<ApiError> for SyncError {
    fn from(error: ApiError) -> Self {
        SyncError::ApiError { source: error }
    }
}

impl From<io::Error> for SyncError {
    fn from(error: io::Error) -> Self {
        SyncError::IOError { source: error }
    }
}
