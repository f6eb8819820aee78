use crate::error::CatalogResult;
use crate::product::Product;
use crate::repository::{ProductFilter, ProductRepository};

/// Lazy finder result.
///
/// Holds the predicate only; nothing reaches storage until `count`,
/// `fetch_all` or `first` is awaited. Each call re-runs the query.
pub struct ProductQuery<'r, R: ?Sized> {
    repo: &'r R,
    filter: ProductFilter,
}

impl<'r, R> ProductQuery<'r, R>
where
    R: ProductRepository + ?Sized,
{
    pub fn new(repo: &'r R, filter: ProductFilter) -> Self {
        Self { repo, filter }
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    /// Number of matching rows.
    pub async fn count(&self) -> CatalogResult<u64> {
        self.repo.count(&self.filter).await
    }

    /// All matching products, ordered by id.
    pub async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        self.repo.list(&self.filter).await
    }

    pub async fn first(&self) -> CatalogResult<Option<Product>> {
        Ok(self.fetch_all().await?.into_iter().next())
    }
}

impl<R: ?Sized> core::fmt::Debug for ProductQuery<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductQuery")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
