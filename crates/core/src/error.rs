//! Validation error model.

use thiserror::Error;

/// Result type used for input-shape validation.
pub type ValidationResult<T> = Result<T, DataValidationError>;

/// Raised for every input-shape violation.
///
/// These are deterministic failures detected before any storage side effect:
/// malformed client payloads, wrong JSON types, unknown enum names, and
/// persistence calls on records that were never created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataValidationError {
    /// A required attribute was absent from the input mapping.
    #[error("Invalid product: missing {0}")]
    MissingField(String),

    /// An attribute was present but carried the wrong JSON type.
    #[error("Invalid type for {expected} [{field}]: {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A category name outside the closed enumeration.
    #[error("Invalid attribute: unknown category {0:?}")]
    UnknownCategory(String),

    /// A price that does not parse as a fixed-point decimal.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// The input was not a mapping at all.
    #[error("Invalid product: body of request contained bad or no data {0}")]
    BadData(String),

    /// `update`/`delete` on a record that has no id.
    #[error("{operation} called with empty ID field")]
    MissingId { operation: &'static str },
}

impl DataValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_type(field: &'static str, expected: &'static str, found: &'static str) -> Self {
        Self::InvalidType {
            field,
            expected,
            found,
        }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn bad_data(msg: impl Into<String>) -> Self {
        Self::BadData(msg.into())
    }

    pub fn missing_id(operation: &'static str) -> Self {
        Self::MissingId { operation }
    }
}
