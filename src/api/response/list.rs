use serde::{Deserialize, Serialize};

/* Only the first page of a list is ever read. The pagination fields are kept so that a truncated listing can at
 * least be reported.
 */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: Option<u64>,
    pub warnings: Option<Vec<String>>,
}
