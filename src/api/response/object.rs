use super::{BulkData, Card, CardSymbol, Catalog, ErrorObject, List, Ruling, Set};
use crate::api::ApiError;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/* API responses carry an "object" field naming their kind. Decoding through this enum lets a caller tell an error
 * object apart from the list it asked for.
 */
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum Object {
    BulkData(BulkData),
    Card(Box<Card>),
    CardSymbol(CardSymbol),
    Catalog(Catalog),
    Error(ErrorObject),
    List(List<Object>),
    Ruling(Ruling),
    Set(Set),
}

impl Object {
    pub fn kind(&self) -> &'static str {
        match self {
            Object::BulkData(_) => "bulk_data",
            Object::Card(_) => "card",
            Object::CardSymbol(_) => "card_symbol",
            Object::Catalog(_) => "catalog",
            Object::Error(_) => "error",
            Object::List(_) => "list",
            Object::Ruling(_) => "ruling",
            Object::Set(_) => "set",
        }
    }
}

/* Only the top level of a listing is told apart by its "object" field. Entries are decoded as bulk data directly,
 * whether or not they are tagged, and entries tagged as some other kind are skipped.
 */
pub fn bulk_data_from_slice(bytes: &[u8]) -> Result<List<BulkData>, ApiError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match object_kind(&value).as_deref() {
        None | Some("list") => {}
        Some("error") => {
            return Err(ApiError::Response {
                error: serde_json::from_value(value)?,
            })
        }
        Some(kind) => {
            return Err(ApiError::UnexpectedObject {
                kind: kind.to_string(),
            })
        }
    }

    let list: List<Value> = serde_json::from_value(value)?;
    let mut data = Vec::with_capacity(list.data.len());
    for entry in list.data {
        match object_kind(&entry).as_deref() {
            None | Some("bulk_data") => data.push(serde_json::from_value(entry)?),
            Some(kind) => warn!("Skipping {} object in bulk data listing.", kind),
        }
    }

    Ok(List {
        data,
        has_more: list.has_more,
        next_page: list.next_page,
        total_cards: list.total_cards,
        warnings: list.warnings,
    })
}

fn object_kind(value: &Value) -> Option<String> {
    value.get("object").and_then(Value::as_str).map(str::to_owned)
}
