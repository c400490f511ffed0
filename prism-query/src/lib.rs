//! Query descriptors for Prism search clients
//!
//! A [`QueryDescriptor`] captures what a search should cover without saying
//! what to match:
//!
//! - a page (`offset`, `size`), defaulting to `(0, 10)`
//! - an optional sort, built up by appending [`Order`]s
//! - the indices, types and fields to search, each kept in insertion order
//!
//! The [`request`] module turns a finished descriptor into an
//! Elasticsearch-style `_search` path and body.
//!
//! ```
//! use prism_query::{Order, QueryDescriptor, RequestTranslator};
//!
//! let mut query = QueryDescriptor::new();
//! query
//!     .add_indices(["products"])
//!     .add_fields(["name", "price"])
//!     .add_sort(Order::desc("price"));
//! query.set_page(20, 5)?;
//!
//! let request = RequestTranslator::default().translate(&query)?;
//! assert_eq!(request.path, "/products/_search");
//! # Ok::<(), prism_query::QueryError>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod page;
pub mod request;
pub mod sort;

pub use config::QueryConfig;
pub use descriptor::{QueryDescriptor, QueryDescriptorBuilder};
pub use error::{NameKind, QueryError};
pub use page::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use request::{RequestTranslator, SearchRequest};
pub use sort::{Direction, Order, Sort};

/// Result type for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
