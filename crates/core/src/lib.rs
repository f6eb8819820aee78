//! `catalog-core`: shared building blocks for the product catalog.
//!
//! This crate contains **pure** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DataValidationError, ValidationResult};
pub use id::ProductId;
pub use value_object::ValueObject;
