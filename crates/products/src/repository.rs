//! Storage port for products.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::ProductId;

use crate::category::Category;
use crate::error::CatalogResult;
use crate::price::Price;
use crate::product::Product;

/// Equality predicate on a single product attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Name(String),
    Availability(bool),
    Category(Category),
    Price(Price),
}

impl ProductFilter {
    /// Whether `product` satisfies the predicate (exact match only).
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Name(name) => &product.name == name,
            ProductFilter::Availability(flag) => product.available == *flag,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Price(price) => product.price == *price,
        }
    }
}

/// Relational storage for products.
///
/// Implementations own the `products` table. Each method is a single
/// statement; listings are ordered by id ascending.
///
/// ## Contract
///
/// - `insert` ignores `product.id` and returns the generated key.
/// - `update` and `delete` return `false` when no row has the given id.
/// - `get` returns `None` for a missing id rather than an error.
/// - Backend failures surface as `CatalogError::Storage` with the original
///   error as `source`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId>;

    async fn update(&self, id: ProductId, product: &Product) -> CatalogResult<bool>;

    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;

    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>>;

    async fn count(&self, filter: &ProductFilter) -> CatalogResult<u64>;

    /// Remove every row; returns how many were deleted.
    async fn clear(&self) -> CatalogResult<u64>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        (**self).insert(product).await
    }

    async fn update(&self, id: ProductId, product: &Product) -> CatalogResult<bool> {
        (**self).update(id, product).await
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        (**self).delete(id).await
    }

    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        (**self).get(id).await
    }

    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        (**self).list(filter).await
    }

    async fn count(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        (**self).count(filter).await
    }

    async fn clear(&self) -> CatalogResult<u64> {
        (**self).clear().await
    }
}
