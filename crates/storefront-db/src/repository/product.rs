//! # Product Repository
//!
//! Database operations for the product catalog.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::Repository;
use storefront_core::{Money, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

/// Raw product row as stored in SQLite.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price_cents: i64,
}

impl ProductRow {
    fn into_product(self) -> DbResult<Product> {
        let product = Product::new(self.id, self.name, Money::from_cents(self.price_cents))?;
        Ok(product)
    }
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id(), "Inserting product");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price().cents())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id(), "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3,
                updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price().cents())
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id()));
        }

        Ok(())
    }

    async fn find(&self, id: &str) -> DbResult<Product> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, price_cents
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_product(),
            None => Err(DbError::not_found("Product", id)),
        }
    }

    async fn find_all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, price_cents
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_product() {
        let db = db().await;
        let repo = db.products();

        let product = Product::new("P1", "Product 1", Money::from_cents(1000)).unwrap();
        repo.create(&product).await.unwrap();

        let found = repo.find("P1").await.unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_update_product() {
        let db = db().await;
        let repo = db.products();

        let mut product = Product::new("P1", "Product 1", Money::from_cents(1000)).unwrap();
        repo.create(&product).await.unwrap();

        product.change_name("Product One").unwrap();
        product.change_price(Money::from_cents(1500)).unwrap();
        repo.update(&product).await.unwrap();

        let found = repo.find("P1").await.unwrap();
        assert_eq!(found.name(), "Product One");
        assert_eq!(found.price(), Money::from_cents(1500));
    }

    #[tokio::test]
    async fn test_find_missing_product_is_not_found() {
        let db = db().await;

        let err = db.products().find("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_all_products() {
        let db = db().await;
        let repo = db.products();

        repo.create(&Product::new("P1", "Product 1", Money::from_cents(100)).unwrap())
            .await
            .unwrap();
        repo.create(&Product::new("P2", "Product 2", Money::from_cents(200)).unwrap())
            .await
            .unwrap();

        let products = repo.find_all().await.unwrap();
        assert_eq!(products.len(), 2);
    }
}
