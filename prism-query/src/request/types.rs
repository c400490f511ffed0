//! Elasticsearch `_search` request body types
//!
//! Only the parts a query descriptor can express: paging, sort and the
//! `_source` projection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root `_search` request body
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchBody {
    /// Starting offset
    pub from: usize,

    /// Maximum number of results
    pub size: usize,

    /// Sort order, omitted for relevance order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortClause>>,

    /// Fields to return in _source, omitted to return the whole document
    #[serde(default, rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_total_hits: Option<bool>,
}

/// One `{field: {"order": ...}}` entry of a sort list
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SortClause(pub BTreeMap<String, SortOrder>);

impl SortClause {
    pub fn new(field: impl Into<String>, order: impl Into<String>) -> Self {
        Self(BTreeMap::from([(
            field.into(),
            SortOrder {
                order: order.into(),
            },
        )]))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SortOrder {
    pub order: String,
}
