mod bulk_data;
mod card;
mod card_symbol;
mod catalog;
mod error_object;
mod list;
mod object;
mod ruling;
mod set;

pub use bulk_data::BulkData;
pub use card::*;
pub use card_symbol::CardSymbol;
pub use catalog::Catalog;
pub use error_object::ErrorObject;
pub use list::List;
pub use object::*;
pub use ruling::Ruling;
pub use set::Set;
