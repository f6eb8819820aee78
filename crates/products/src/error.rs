//! Errors surfaced by catalog persistence operations.

use thiserror::Error;

use catalog_core::{DataValidationError, ProductId};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Boxed backend error, kept intact as the `source` of [`CatalogError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Entity-manager operation error.
///
/// Validation failures are raised before the repository is touched. Storage
/// failures carry the backend error unchanged as their `source`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    /// `update` targeted an id with no stored row.
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("storage failure during {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// A stored row could not be decoded into a valid product.
    #[error("corrupt product row: {0}")]
    Corrupt(String),
}

impl CatalogError {
    pub fn storage(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            operation,
            source: source.into(),
        }
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

impl From<core::convert::Infallible> for CatalogError {
    fn from(value: core::convert::Infallible) -> Self {
        match value {}
    }
}
