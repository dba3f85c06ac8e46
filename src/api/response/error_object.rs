use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub status: u16,
    pub code: String,
    pub details: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub warnings: Option<Vec<String>>,
}
