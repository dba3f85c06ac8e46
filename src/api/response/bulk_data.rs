use crate::util::format;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BulkData {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: DateTime<Utc>,
    pub uri: Url,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub compressed_size: Option<u64>,
    pub size: Option<u64>,
    pub download_uri: Url,
    pub content_type: String,
    pub content_encoding: String,
}

impl BulkData {
    // Older API responses only carry compressed_size, newer ones only size.
    pub fn size(&self) -> Option<u64> {
        self.compressed_size.or(self.size)
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

impl fmt::Display for BulkData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size().map(format::human_readable).unwrap_or_else(|| "unknown size".to_string());
        write!(
            f,
            "{:<20} {:<16} {:>10}  updated {}",
            self.name,
            self.kind,
            size,
            self.updated_at.format("%Y-%m-%d %H:%M UTC")
        )
    }
}
