//! Offset/size page requests

use crate::error::QueryError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size used when a query never sets one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page used when a query never sets one: offset 0, size 10
pub const DEFAULT_PAGE: PageRequest = PageRequest {
    offset: 0,
    size: DEFAULT_PAGE_SIZE,
};

/// A sub-range of an ordered result set, maps to `from`/`size` in a search body.
///
/// `size` is always positive. Construct through [`PageRequest::new`] so both
/// bounds are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct PageRequest {
    offset: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    offset: i64,
    #[serde(default = "default_raw_size")]
    size: i64,
}

fn default_raw_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl TryFrom<RawPage> for PageRequest {
    type Error = QueryError;

    fn try_from(raw: RawPage) -> Result<Self> {
        Self::new(raw.offset, raw.size)
    }
}

impl PageRequest {
    /// Create a page request.
    ///
    /// Fails with [`QueryError::InvalidArgument`] when `offset < 0` or `size <= 0`.
    pub fn new(offset: i64, size: i64) -> Result<Self> {
        if offset < 0 {
            return Err(QueryError::invalid_argument(format!(
                "page offset must not be negative, got {}",
                offset
            )));
        }
        if size <= 0 {
            return Err(QueryError::invalid_argument(format!(
                "page size must be greater than zero, got {}",
                size
            )));
        }
        let offset = usize::try_from(offset).map_err(|_| {
            QueryError::invalid_argument(format!("page offset {} out of range", offset))
        })?;
        let size = usize::try_from(size).map_err(|_| {
            QueryError::invalid_argument(format!("page size {} out of range", size))
        })?;
        Ok(Self { offset, size })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-based page number. Offsets that are not a multiple of the size
    /// round down.
    pub fn page_number(&self) -> usize {
        self.offset / self.size
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// The page directly after this one
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.size),
            size: self.size,
        }
    }

    /// The page directly before this one, or the first page
    pub fn previous_or_first(&self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.size),
            size: self.size,
        }
    }

    pub fn first(&self) -> Self {
        Self {
            offset: 0,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        DEFAULT_PAGE
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset={}, size={}", self.offset, self.size)
    }
}
