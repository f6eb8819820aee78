//! Product catalog entity.
//!
//! This crate owns the `Product` record, its validation and key-value
//! serialization rules, and the entity-manager operations (`create`,
//! `update`, `delete`, finders). Storage is reached only through the
//! [`ProductRepository`] port; relational adapters live in `catalog-infra`.

pub mod category;
pub mod error;
pub mod manager;
pub mod memory;
pub mod price;
pub mod product;
pub mod query;
pub mod repository;

pub use catalog_core::{DataValidationError, ProductId};
pub use category::Category;
pub use error::{BoxError, CatalogError, CatalogResult};
pub use memory::InMemoryProductRepository;
pub use price::{PRICE_SCALE, Price};
pub use product::Product;
pub use query::ProductQuery;
pub use repository::{ProductFilter, ProductRepository};
