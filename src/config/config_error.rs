use std::env::VarError;
use std::error::Error;
use std::fmt;
use tokio::io;
use url::ParseError;

#[derive(Debug)]
pub enum ConfigError {
    DirectoryMissing,
    ExpansionError { source: shellexpand::LookupError<VarError> },
    IOError { source: io::Error },
    DeserializationError { source: toml::de::Error },
    ParseError { source: ParseError },
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::DirectoryMissing => None,
            ConfigError::ExpansionError { ref source } => Some(source),
            ConfigError::IOError { ref source } => Some(source),
            ConfigError::DeserializationError { ref source } => Some(source),
            ConfigError::ParseError { ref source } => Some(source),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::DirectoryMissing => {
                f.write_str("Unable to determine a save directory. Please set save_dir in the configuration file.")
            }
            ConfigError::ExpansionError { source } => source.fmt(f),
            ConfigError::IOError { source } => source.fmt(f),
            ConfigError::DeserializationError { source } => source.fmt(f),
            ConfigError::ParseError { source } => write!(f, "Invalid api_url: {}", source),
        }
    }
}

impl From<shellexpand::LookupError<VarError>> for ConfigError {
    fn from(error: shellexpand::LookupError<VarError>) -> Self {
        ConfigError::ExpansionError { source: error }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IOError { source: error }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::DeserializationError { source: error }
    }
}

impl From<ParseError> for ConfigError {
    fn from(error: ParseError) -> Self {
        ConfigError::ParseError { source: error }
    }
}
