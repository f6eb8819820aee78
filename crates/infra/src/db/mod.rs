//! Relational `ProductRepository` adapters.
//!
//! Both backends share one table layout (`products`) and one error mapping:
//!
//! | sqlx error | `CatalogError` |
//! |------------|----------------|
//! | any | `Storage { operation, source }`, `source` is the original `sqlx::Error` |
//! | row decodes to an unknown category / bad price | `Corrupt` |

pub mod postgres;
pub mod sqlite;

pub use postgres::PostgresProductRepository;
pub use sqlite::SqliteProductRepository;

use catalog_core::ProductId;
use catalog_products::{CatalogError, Category, Price, Product};

pub(crate) const SELECT_COLUMNS: &str =
    "SELECT id, name, description, price, available, category FROM products";

/// Map a sqlx failure without discarding it.
pub fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> CatalogError {
    if let sqlx::Error::Database(db_err) = &err {
        tracing::warn!(
            operation,
            code = db_err.code().as_deref().unwrap_or("-"),
            "database rejected statement: {}",
            db_err.message()
        );
    }
    CatalogError::storage(operation, err)
}

/// `CHECK` expression restricting the category column to enum member names.
pub(crate) fn category_check() -> String {
    let names: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("'{}'", c.name()))
        .collect();
    format!("CHECK (category IN ({}))", names.join(", "))
}

pub(crate) fn decode_product(
    id: i64,
    name: String,
    description: String,
    price: Price,
    available: bool,
    category: &str,
) -> Result<Product, CatalogError> {
    let category: Category = category
        .parse()
        .map_err(|e| CatalogError::corrupt(format!("product {id}: {e}")))?;

    Ok(Product {
        id: Some(ProductId::new(id)),
        name,
        description,
        price,
        available,
        category,
    })
}
