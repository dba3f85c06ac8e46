mod api_error;
mod client;
pub mod response;

pub use api_error::ApiError;
pub use client::*;
pub use response::{BulkData, ErrorObject, List};
