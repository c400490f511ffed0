//! Error types for query descriptors and request translation

/// Errors raised while building or translating a query
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid {kind} name: {name:?}")]
    InvalidName { kind: NameKind, name: String },

    #[error("Result window is too large: from ({from}) + size ({size}) exceeds {max}")]
    ResultWindowTooLarge { from: usize, size: usize, max: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which list of a descriptor a rejected name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Index,
    Type,
    Field,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Index => "index",
            Self::Type => "type",
            Self::Field => "field",
        })
    }
}

impl QueryError {
    /// Elasticsearch exception name for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "illegal_argument_exception",
            Self::InvalidName { .. } => "invalid_index_name_exception",
            Self::ResultWindowTooLarge { .. } => "query_phase_execution_exception",
            Self::Json(_) => "parse_exception",
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
