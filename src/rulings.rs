use crate::api::response::Ruling;

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{self, ErrorKind};

#[derive(Debug)]
pub enum RulingError {
    NotFound { path: PathBuf },
    IOError { source: io::Error },
    DeserializationError { source: serde_json::Error },
}

impl Error for RulingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RulingError::NotFound { .. } => None,
            RulingError::IOError { ref source } => Some(source),
            RulingError::DeserializationError { ref source } => Some(source),
        }
    }
}

impl fmt::Display for RulingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RulingError::NotFound { path } => write!(f, "The rulings file {:?} does not exist.", path),
            RulingError::IOError { source } => source.fmt(f),
            RulingError::DeserializationError { source } => source.fmt(f),
        }
    }
}

impl From<io::Error> for RulingError {
    fn from(error: io::Error) -> Self {
        RulingError::IOError { source: error }
    }
}

impl From<serde_json::Error> for RulingError {
    fn from(error: serde_json::Error) -> Self {
        RulingError::DeserializationError { source: error }
    }
}

/// Writes every ruling in a downloaded rulings file to `out`, one per line, and returns how many there were.
pub async fn print_rulings<W: Write>(path: &Path, out: &mut W) -> Result<usize, RulingError> {
    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RulingError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let rulings: Vec<Ruling> = serde_json::from_slice(&contents)?;
    for ruling in &rulings {
        writeln!(out, "{}", ruling)?;
    }
    Ok(rulings.len())
}
