//! Translates a query descriptor into an Elasticsearch `_search` request

use crate::config::{QueryConfig, RequestConfig};
use crate::descriptor::QueryDescriptor;
use crate::error::{NameKind, QueryError};
use crate::request::types::*;
use crate::Result;
use regex::Regex;
use std::sync::OnceLock;

/// A translated search request: the URL path and the JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub path: String,
    pub body: SearchBody,
}

impl SearchRequest {
    pub fn body_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.body)?)
    }

    pub fn body_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.body)?)
    }
}

/// Translates [`QueryDescriptor`]s to search requests
#[derive(Debug, Default)]
pub struct RequestTranslator {
    config: RequestConfig,
}

impl RequestTranslator {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            config: config.request.clone(),
        }
    }

    /// Translate a descriptor to a `_search` path and body
    pub fn translate(&self, query: &QueryDescriptor) -> Result<SearchRequest> {
        let path = self.translate_path(query)?;

        let page = query.page();
        let (from, size) = (page.offset(), page.size());
        if from.saturating_add(size) > self.config.max_result_window {
            return Err(QueryError::ResultWindowTooLarge {
                from,
                size,
                max: self.config.max_result_window,
            });
        }

        let sort = match query.sort() {
            Some(sort) => {
                let properties: Vec<&str> = sort.iter().map(|o| o.property.as_str()).collect();
                validate_body_names(NameKind::Field, &properties)?;
                let clauses = sort
                    .iter()
                    .map(|order| SortClause::new(&order.property, order.direction.as_str()))
                    .collect();
                Some(clauses)
            }
            None => None,
        };

        let source = if query.fields().is_empty() {
            None
        } else {
            validate_body_names(NameKind::Field, query.fields())?;
            Some(query.fields().to_vec())
        };

        let body = SearchBody {
            from,
            size,
            sort,
            source,
            track_total_hits: self.config.track_total_hits,
        };

        tracing::debug!(path = %path, from, size, "Translated query descriptor");

        Ok(SearchRequest { path, body })
    }

    /// `/{indices}/{types}/_search`, with the type segment left out when the
    /// query names no types
    pub fn translate_path(&self, query: &QueryDescriptor) -> Result<String> {
        validate_path_names(NameKind::Index, query.indices())?;
        validate_path_names(NameKind::Type, query.types())?;

        let indices = if query.indices().is_empty() {
            self.config.all_indices.clone()
        } else {
            query.indices().join(",")
        };

        if query.types().is_empty() {
            Ok(format!("/{}/_search", indices))
        } else {
            Ok(format!("/{}/{}/_search", indices, query.types().join(",")))
        }
    }
}

/// Characters that cannot appear in a path segment or a comma-separated list.
/// Wildcards are allowed, they are valid in index patterns.
fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^[^\\/?"<>|,#\s]+$"#).expect("name pattern is a valid regex")
    })
}

/// Names that end up in the URL path. `.` and `..` are dot segments and would
/// be collapsed away when the URL is normalised.
fn validate_path_names(kind: NameKind, names: &[String]) -> Result<()> {
    let pattern = name_pattern();
    let invalid = |name: &&String| {
        !pattern.is_match(name.as_str()) || matches!(name.as_str(), "." | "..")
    };
    match names.iter().find(invalid) {
        Some(name) => Err(QueryError::InvalidName {
            kind,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

/// Names that end up in the JSON body only need to be non-empty
fn validate_body_names<S: AsRef<str>>(kind: NameKind, names: &[S]) -> Result<()> {
    match names.iter().find(|name| name.as_ref().trim().is_empty()) {
        Some(name) => Err(QueryError::InvalidName {
            kind,
            name: name.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}
