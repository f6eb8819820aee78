//! SQLite-backed product repository.
//!
//! SQLite has no fixed-point column type, so `price` is stored as canonical
//! two-digit text (`"12.50"`). `Price` normalises scale on construction,
//! which keeps text equality in `find_by_price` exact.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::instrument;

use catalog_core::ProductId;
use catalog_products::{
    CatalogError, CatalogResult, Price, Product, ProductFilter, ProductRepository,
};

use super::{SELECT_COLUMNS, category_check, decode_product, map_sqlx_error};
use crate::config::DatabaseConfig;

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    available: bool,
    category: String,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<Product> {
        let price = Price::from_str(&self.price)
            .map_err(|e| CatalogError::corrupt(format!("product {}: {e}", self.id)))?;
        decode_product(
            self.id,
            self.name,
            self.description,
            price,
            self.available,
            &self.category,
        )
    }
}

#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect using `config` and make sure the table exists.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let repo = Self::new(config.connect_sqlite().await?);
        repo.init_db().await?;
        Ok(repo)
    }

    /// Private in-memory database with the table already created.
    pub async fn in_memory() -> CatalogResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| map_sqlx_error("open_in_memory", e))?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("open_in_memory", e))?;

        let repo = Self::new(pool);
        repo.init_db().await?;
        Ok(repo)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `products` table if missing. Idempotent.
    #[instrument(skip(self), fields(operation = "init_db"), err)]
    pub async fn init_db(&self) -> CatalogResult<()> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                description TEXT NOT NULL,
                price       TEXT NOT NULL,
                available   BOOLEAN NOT NULL DEFAULT 1,
                category    TEXT NOT NULL DEFAULT 'UNKNOWN' {}
            )
            "#,
            category_check()
        );

        sqlx::query(&ddl)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("init_db", e))?;

        tracing::debug!("products table ready");
        Ok(())
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ProductFilter) {
    match filter {
        ProductFilter::All => {}
        ProductFilter::Name(name) => {
            qb.push(" WHERE name = ").push_bind(name.clone());
        }
        ProductFilter::Availability(flag) => {
            qb.push(" WHERE available = ").push_bind(*flag);
        }
        ProductFilter::Category(category) => {
            qb.push(" WHERE category = ").push_bind(category.name());
        }
        ProductFilter::Price(price) => {
            qb.push(" WHERE price = ").push_bind(price.to_string());
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self, product), fields(operation = "insert_product"), err)]
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.available)
        .bind(product.category.name())
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_product", e))?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }

    #[instrument(skip(self, product), fields(operation = "update_product", product_id = %id), err)]
    async fn update(&self, id: ProductId, product: &Product) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?1, description = ?2, price = ?3, available = ?4, category = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.available)
        .bind(product.category.name())
        .bind(id.get())
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_product", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(operation = "delete_product", product_id = %id), err)]
    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(operation = "get_product", product_id = %id), err)]
    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .bind(id.get())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_product", e))?;

        row.map(ProductRow::into_product).transpose()
    }

    #[instrument(skip(self), fields(operation = "list_products"), err)]
    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_COLUMNS);
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY id ASC");

        let rows = qb
            .build_query_as::<ProductRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_products", e))?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    #[instrument(skip(self), fields(operation = "count_products"), err)]
    async fn count(&self, filter: &ProductFilter) -> CatalogResult<u64> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM products");
        push_filter(&mut qb, filter);

        let count: i64 = qb
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_products", e))?;

        Ok(count as u64)
    }

    #[instrument(skip(self), fields(operation = "clear_products"), err)]
    async fn clear(&self) -> CatalogResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("clear_products", e))?;

        Ok(result.rows_affected())
    }
}
