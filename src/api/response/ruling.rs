use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ruling {
    pub oracle_id: String,
    pub source: String,
    pub published_at: NaiveDate,
    pub comment: String,
}

impl fmt::Display for Ruling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}] {}: {}", self.published_at, self.source, self.oracle_id, self.comment)
    }
}
