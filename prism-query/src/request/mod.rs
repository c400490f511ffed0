//! Request translation for Elasticsearch-compatible backends

mod translator;
mod types;

pub use translator::{RequestTranslator, SearchRequest};
pub use types::{SearchBody, SortClause, SortOrder};
