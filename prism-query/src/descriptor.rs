//! Query descriptor: paging, sorting and the indices/types/fields a search
//! targets.
//!
//! A [`QueryDescriptor`] is filled in by a query builder and handed once to a
//! request translator (see [`crate::request`]). It holds no connection or
//! mapping state and performs no I/O. Names are stored as given; validating
//! them is the translator's job since the rules depend on the backend.

use crate::error::QueryError;
use crate::page::PageRequest;
use crate::sort::{Order, Sort};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    page: PageRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<Sort>,
    #[serde(default)]
    indices: Vec<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    fields: Vec<String>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> QueryDescriptorBuilder {
        QueryDescriptorBuilder::default()
    }

    /// Restrict results to the given page.
    ///
    /// Fails with [`QueryError::InvalidArgument`] if `offset < 0` or
    /// `size <= 0`, leaving the current page untouched.
    pub fn set_page(&mut self, offset: i64, size: i64) -> Result<&mut Self> {
        self.page = PageRequest::new(offset, size)?;
        Ok(self)
    }

    pub fn set_pageable(&mut self, page: PageRequest) -> &mut Self {
        self.page = page;
        self
    }

    /// Current page, `(0, 10)` if never set
    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Append `sort` after any sort keys already present.
    pub fn add_sort(&mut self, sort: impl Into<Sort>) -> &mut Self {
        let sort = sort.into();
        self.sort = Some(match self.sort.take() {
            Some(existing) => existing.and(sort),
            None => sort,
        });
        self
    }

    /// `None` until [`add_sort`](Self::add_sort) is called
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn add_indices<I, S>(&mut self, indices: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices.extend(indices.into_iter().map(Into::into));
        self
    }

    /// Indices to search, empty means all
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    pub fn add_types<I, S>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Types to search, empty means all
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn add_fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Fields to return, empty means all
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Owned builder for [`QueryDescriptor`].
///
/// Paging errors are held until [`build`](Self::build) so calls can be chained
/// without intermediate `?`.
#[derive(Debug, Default)]
pub struct QueryDescriptorBuilder {
    descriptor: QueryDescriptor,
    error: Option<QueryError>,
}

impl QueryDescriptorBuilder {
    pub fn page(mut self, offset: i64, size: i64) -> Self {
        if let Err(e) = self.descriptor.set_page(offset, size) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn sort(mut self, sort: impl Into<Sort>) -> Self {
        self.descriptor.add_sort(sort);
        self
    }

    pub fn order(self, order: Order) -> Self {
        self.sort(order)
    }

    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.add_indices(indices);
        self
    }

    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.add_types(types);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor.add_fields(fields);
        self
    }

    /// Finish the descriptor, returning the first paging error if any
    pub fn build(self) -> Result<QueryDescriptor> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.descriptor),
        }
    }
}
