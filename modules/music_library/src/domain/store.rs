//! Store client seam
//!
//! The services talk to the backing relational store only through
//! [`RowStore`]: table-scoped select/insert/update/delete with equality
//! filters and ordering. Rows are keyed by persisted column names.
//! Implementations are in infra/storage.

use super::schema::Row;
use crate::contract::LibraryError;
use anyhow::Result;
use async_trait::async_trait;

/// Equality filter on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &str, value: impl Into<String>) -> Self {
        Self {
            column: column.to_string(),
            value: value.into(),
        }
    }
}

/// Sort order on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ascending: true,
        }
    }
}

/// Table-scoped query client for the backing store
///
/// Every mutating call returns the affected rows as the store now holds
/// them; an empty result means nothing matched.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Select rows matching all filters
    async fn select(&self, table: &str, filters: &[Filter], order: Option<&Order>)
        -> Result<Vec<Row>>;

    /// Insert one row, returning it with store-assigned columns filled in
    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>>;

    /// Apply `changes` to every row matching all filters
    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<Vec<Row>>;

    /// Delete every row matching all filters
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>>;
}

/// Translate a failed store call into the contract error
pub(crate) fn store_error<'a>(
    operation: &'static str,
    table: &'a str,
) -> impl FnOnce(anyhow::Error) -> LibraryError + 'a {
    move |err| {
        let message = format!("{err:#}");
        tracing::error!(operation, table, error = %message, "store call failed");
        LibraryError::Store { message }
    }
}
