use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use catalog_core::ProductId;

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;
use crate::repository::{ProductFilter, ProductRepository};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

/// In-memory product table.
///
/// Intended for tests/dev. Ids are never reused, like a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &'static str) -> CatalogResult<RwLockReadGuard<'_, Table>> {
        self.table
            .read()
            .map_err(|_| CatalogError::storage(operation, "lock poisoned"))
    }

    fn write(&self, operation: &'static str) -> CatalogResult<RwLockWriteGuard<'_, Table>> {
        self.table
            .write()
            .map_err(|_| CatalogError::storage(operation, "lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        let mut table = self.write("insert")?;
        table.last_id += 1;
        let id = ProductId::new(table.last_id);

        let mut row = product.clone();
        row.id = Some(id);
        table.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, id: ProductId, product: &Product) -> CatalogResult<bool> {
        let mut table = self.write("update")?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = product.clone();
                row.id = Some(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        Ok(self.write("delete")?.rows.remove(&id).is_some())
    }

    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.read("get")?.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        let table = self.read("list")?;
        Ok(table
            .rows
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        let table = self.read("count")?;
        Ok(table.rows.values().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn clear(&self) -> CatalogResult<u64> {
        let mut table = self.write("clear")?;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}
