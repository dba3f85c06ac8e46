use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub uri: Option<Url>,
    pub total_values: u64,
    pub data: Vec<String>,
}
