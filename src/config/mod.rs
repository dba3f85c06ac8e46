pub mod config_error;

pub use config_error::ConfigError;

use crate::api::BulkData;

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.scryfall.com/bulk-data";
pub const DEFAULT_LOG_FILE: &str = "bulk_data.info";
pub const DEFAULT_RULINGS_FILE: &str = "Rulings.json";

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigBuilder {
    pub api_url: Option<String>,
    pub save_dir: Option<String>,
    pub log_file: Option<String>,
    pub rulings_file: Option<String>,
}

impl ConfigBuilder {
    /* The configuration file is optional, every setting has a default. A file that exists but can't be read or parsed
     * is still an error.
     */
    pub fn load() -> Result<Self, ConfigError> {
        match config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading configuration from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn save_dir<S: Into<String>>(mut self, save_dir: S) -> Self {
        self.save_dir = Some(save_dir.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let api_url = Url::parse(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;

        let save_dir = match self.save_dir {
            Some(dir) => PathBuf::from(shellexpand::full(&dir)?.as_ref()),
            None => default_save_dir().ok_or(ConfigError::DirectoryMissing)?,
        };

        Ok(Config {
            api_url,
            save_dir,
            log_file: self.log_file.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            rulings_file: self.rulings_file.unwrap_or_else(|| DEFAULT_RULINGS_FILE.to_string()),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: Url,
    pub save_dir: PathBuf,
    pub log_file: String,
    pub rulings_file: String,
}

impl Config {
    pub fn log_path(&self) -> PathBuf {
        self.save_dir.join(&self.log_file)
    }

    pub fn rulings_path(&self) -> PathBuf {
        self.save_dir.join(&self.rulings_file)
    }

    /* Bulk data files are named after the listing entry, which comes from a configurable URL. A name that would
     * place the file anywhere but directly inside the save directory gets no path.
     */
    pub fn download_path(&self, bulk_data: &BulkData) -> Option<PathBuf> {
        let file_name = bulk_data.file_name();
        if bulk_data.name.trim().is_empty() || file_name.contains(|c: char| c == '/' || c == '\\') {
            return None;
        }
        let mut components = Path::new(&file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.save_dir.join(file_name)),
            _ => None,
        }
    }
}

pub fn config_file() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(env!("CARGO_CRATE_NAME"));
    path.push("config.toml");
    Some(path)
}

fn default_save_dir() -> Option<PathBuf> {
    let mut path = dirs::data_local_dir()?;
    path.push(env!("CARGO_CRATE_NAME"));
    Some(path)
}
