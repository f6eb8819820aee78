//! Postgres-backed product repository.
//!
//! ## Schema
//!
//! `init_db()` creates the `products` table if it does not exist. `price` is
//! `NUMERIC(14, 2)` and round-trips through `rust_decimal::Decimal`;
//! `category` is stored as the member name with a `CHECK` constraint.
//!
//! ## Thread Safety
//!
//! Uses the SQLx connection pool, which is `Send + Sync`. Every method is a
//! single statement on a pooled connection; there are no explicit
//! transactions.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
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
    price: Decimal,
    available: bool,
    category: String,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<Product> {
        let price = Price::new(self.price)
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
pub struct PostgresProductRepository {
    pool: Arc<PgPool>,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect using `config` and make sure the table exists.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let repo = Self::new(config.connect_postgres().await?);
        repo.init_db().await?;
        Ok(repo)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `products` table if missing. Idempotent.
    #[instrument(skip(self), fields(operation = "init_db"), err)]
    pub async fn init_db(&self) -> CatalogResult<()> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          BIGSERIAL PRIMARY KEY,
                name        VARCHAR(100) NOT NULL,
                description VARCHAR(250) NOT NULL,
                price       NUMERIC(14, 2) NOT NULL,
                available   BOOLEAN NOT NULL DEFAULT TRUE,
                category    VARCHAR(16) NOT NULL DEFAULT 'UNKNOWN' {}
            )
            "#,
            category_check()
        );

        sqlx::query(&ddl)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("init_db", e))?;

        tracing::info!("products table ready");
        Ok(())
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
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
            qb.push(" WHERE price = ").push_bind(price.amount());
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self, product), fields(operation = "insert_product"), err)]
    async fn insert(&self, product: &Product) -> CatalogResult<ProductId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.amount())
        .bind(product.available)
        .bind(product.category.name())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_product", e))?;

        Ok(ProductId::new(id))
    }

    #[instrument(skip(self, product), fields(operation = "update_product", product_id = %id), err)]
    async fn update(&self, id: ProductId, product: &Product) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, available = $4, category = $5
            WHERE id = $6
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.amount())
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
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(operation = "get_product", product_id = %id), err)]
    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_product", e))?;

        row.map(ProductRow::into_product).transpose()
    }

    #[instrument(skip(self), fields(operation = "list_products"), err)]
    async fn list(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
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
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
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
