//! Entity-manager operations: persist a [`Product`] through a repository.
//!
//! State of one instance: *unpersisted* (no id) → `create()` → *persisted* →
//! `update()`* → `delete()` → *detached* (row gone, value still in memory).

use catalog_core::{DataValidationError, ProductId};

use crate::category::Category;
use crate::error::{CatalogError, CatalogResult};
use crate::price::Price;
use crate::product::Product;
use crate::query::ProductQuery;
use crate::repository::{ProductFilter, ProductRepository};

impl Product {
    /// Insert a new row and write the generated id back onto `self`.
    ///
    /// Always inserts: an id already present is discarded first.
    pub async fn create<R>(&mut self, repo: &R) -> CatalogResult<()>
    where
        R: ProductRepository + ?Sized,
    {
        tracing::info!("Creating {}", self);
        self.id = None;
        let id = repo.insert(self).await?;
        self.id = Some(id);
        Ok(())
    }

    /// Persist current field values to the row with this product's id.
    pub async fn update<R>(&self, repo: &R) -> CatalogResult<()>
    where
        R: ProductRepository + ?Sized,
    {
        let id = self.id.ok_or(DataValidationError::missing_id("Update"))?;
        tracing::info!("Saving {}", self);

        if !repo.update(id, self).await? {
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }

    /// Remove this product's row.
    ///
    /// Deleting a row that is already gone succeeds without effect.
    pub async fn delete<R>(&self, repo: &R) -> CatalogResult<()>
    where
        R: ProductRepository + ?Sized,
    {
        let id = self.id.ok_or(DataValidationError::missing_id("Delete"))?;
        tracing::info!("Deleting {}", self);

        if !repo.delete(id).await? {
            tracing::debug!(product_id = %id, "delete matched no row");
        }
        Ok(())
    }

    pub async fn all<R>(repo: &R) -> CatalogResult<Vec<Product>>
    where
        R: ProductRepository + ?Sized,
    {
        tracing::debug!("Processing all Products");
        repo.list(&ProductFilter::All).await
    }

    /// Look up by id; a missing row is `Ok(None)`.
    pub async fn find<R>(repo: &R, id: ProductId) -> CatalogResult<Option<Product>>
    where
        R: ProductRepository + ?Sized,
    {
        tracing::debug!(product_id = %id, "Processing lookup");
        repo.get(id).await
    }

    pub fn find_by_name<'r, R>(repo: &'r R, name: impl Into<String>) -> ProductQuery<'r, R>
    where
        R: ProductRepository + ?Sized,
    {
        let name = name.into();
        tracing::debug!(%name, "Processing name query");
        ProductQuery::new(repo, ProductFilter::Name(name))
    }

    pub fn find_by_availability<R>(repo: &R, available: bool) -> ProductQuery<'_, R>
    where
        R: ProductRepository + ?Sized,
    {
        tracing::debug!(available, "Processing available query");
        ProductQuery::new(repo, ProductFilter::Availability(available))
    }

    pub fn find_by_category<R>(repo: &R, category: Category) -> ProductQuery<'_, R>
    where
        R: ProductRepository + ?Sized,
    {
        tracing::debug!(%category, "Processing category query");
        ProductQuery::new(repo, ProductFilter::Category(category))
    }

    /// Query by exact price. Accepts a [`Price`], a `Decimal`, or decimal text
    /// (quoted text such as `"\"12.50\""` included).
    pub fn find_by_price<R, P>(repo: &R, price: P) -> CatalogResult<ProductQuery<'_, R>>
    where
        R: ProductRepository + ?Sized,
        P: TryInto<Price>,
        CatalogError: From<P::Error>,
    {
        let price = price.try_into()?;
        tracing::debug!(%price, "Processing price query");
        Ok(ProductQuery::new(repo, ProductFilter::Price(price)))
    }
}
