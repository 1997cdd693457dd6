//! # Order Repository
//!
//! Database operations for the order aggregate (orders + order_items).
//!
//! ## Full-Replace Update
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                update(order) - one transaction               │
//! │                                                              │
//! │  1. UPDATE orders          ← customer_id, total, updated_at  │
//! │  2. DELETE order_items     ← every row for this order id     │
//! │  3. INSERT order_items     ← the current in-memory item set  │
//! │                                                              │
//! │  Never a diff: the in-memory aggregate is the single source  │
//! │  of truth and its item list wins wholesale.                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order total is denormalized into the orders row and rewritten on every
//! create/update. Item order is preserved via an explicit `position` column.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::Repository;
use storefront_core::{Money, Order, OrderItem};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

/// Raw order row. `total_cents` is denormalized and not needed for
/// reconstruction (the aggregate recomputes it), so it is not selected.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
}

/// Raw order item row.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: String,
    product_id: String,
    name: String,
    price_cents: i64,
    quantity: i64,
}

impl OrderItemRow {
    fn into_item(self) -> DbResult<OrderItem> {
        let item = OrderItem::new(
            self.id,
            self.name,
            Money::from_cents(self.price_cents),
            self.product_id,
            self.quantity,
        )?;
        Ok(item)
    }
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts one child row per item, positions matching the in-memory order.
    async fn insert_items(tx: &mut Transaction<'_, Sqlite>, order: &Order) -> DbResult<()> {
        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    id, order_id, product_id, name, price_cents, quantity, position
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(item.id())
            .bind(order.id())
            .bind(item.product_id())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(item.quantity())
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Loads the item rows for one order, in persisted (position) order.
    async fn load_items(&self, order_id: &str) -> DbResult<Vec<OrderItem>> {
        let rows: Vec<OrderItemRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, name, price_cents, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY position
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderItemRow::into_item).collect()
    }

    /// Reassembles the aggregate from its rows.
    async fn assemble(&self, row: OrderRow) -> DbResult<Order> {
        let items = self.load_items(&row.id).await?;
        let order = Order::new(row.id, row.customer_id, items)?;
        Ok(order)
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    /// Persists the order row plus one child row per item in a single
    /// transaction. Stores the denormalized total.
    async fn create(&self, order: &Order) -> DbResult<()> {
        debug!(id = %order.id(), items = order.items().len(), "Inserting order");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, total_cents, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(order.id())
        .bind(order.customer_id())
        .bind(order.total().cents())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Rewrites the scalar fields and replaces all child item rows
    /// (delete-all-then-reinsert), recomputing the stored total.
    async fn update(&self, order: &Order) -> DbResult<()> {
        debug!(id = %order.id(), items = order.items().len(), "Updating order");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                customer_id = ?2,
                total_cents = ?3,
                updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(order.id())
        .bind(order.customer_id())
        .bind(order.total().cents())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(DbError::not_found("Order", order.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?1")
            .bind(order.id())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> DbResult<Order> {
        let row: Option<OrderRow> =
            sqlx::query_as("SELECT id, customer_id FROM orders WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => self.assemble(row).await,
            None => Err(DbError::not_found("Order", id)),
        }
    }

    async fn find_all(&self) -> DbResult<Vec<Order>> {
        let rows: Vec<OrderRow> =
            sqlx::query_as("SELECT id, customer_id FROM orders ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            orders.push(self.assemble(row).await?);
        }
        Ok(orders)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use storefront_core::{Address, Customer, Product};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds a customer so order FK constraints hold.
    async fn seed_customer(db: &Database, id: &str, name: &str) {
        let mut customer = Customer::new(id, name).unwrap();
        customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
        db.customers().create(&customer).await.unwrap();
    }

    /// Seeds a product and returns an order item snapshotting it.
    async fn seed_product_item(
        db: &Database,
        item_id: &str,
        product_id: &str,
        name: &str,
        price_cents: i64,
        quantity: i64,
    ) -> OrderItem {
        let product = Product::new(product_id, name, Money::from_cents(price_cents)).unwrap();
        db.products().create(&product).await.unwrap();
        OrderItem::new(
            item_id,
            product.name(),
            product.price(),
            product.id(),
            quantity,
        )
        .unwrap()
    }

    async fn stored_total(db: &Database, order_id: &str) -> i64 {
        sqlx::query_scalar("SELECT total_cents FROM orders WHERE id = ?1")
            .bind(order_id)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn item_count(db: &Database, order_id: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM order_items WHERE order_id = ?1")
            .bind(order_id)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_order() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        let item = seed_product_item(&db, "OI1", "P1", "Product 1", 1000, 2).await;

        let order = Order::new("O1", "C1", vec![item]).unwrap();
        db.orders().create(&order).await.unwrap();

        let found = db.orders().find("O1").await.unwrap();
        assert_eq!(found, order);

        // Total is denormalized into the stored row
        assert_eq!(stored_total(&db, "O1").await, order.total().cents());
    }

    #[tokio::test]
    async fn test_item_order_is_preserved() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        let item1 = seed_product_item(&db, "OI1", "P1", "Product 1", 100, 1).await;
        let item2 = seed_product_item(&db, "OI2", "P2", "Product 2", 200, 2).await;
        let item3 = seed_product_item(&db, "OI3", "P3", "Product 3", 300, 3).await;

        let order = Order::new("O1", "C1", vec![item1, item2, item3]).unwrap();
        db.orders().create(&order).await.unwrap();

        let found = db.orders().find("O1").await.unwrap();
        let ids: Vec<&str> = found.items().iter().map(OrderItem::id).collect();
        assert_eq!(ids, ["OI1", "OI2", "OI3"]);
    }

    #[tokio::test]
    async fn test_update_order() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        let item = seed_product_item(&db, "OI1", "P1", "Product 1", 1000, 2).await;

        let mut order = Order::new("O1", "C1", vec![item.clone()]).unwrap();
        db.orders().create(&order).await.unwrap();

        // Reassign to another customer
        seed_customer(&db, "C2", "Customer 2").await;
        order.change_customer_id("C2").unwrap();
        db.orders().update(&order).await.unwrap();

        let found = db.orders().find("O1").await.unwrap();
        assert_eq!(found.customer_id(), "C2");
        assert_eq!(found.items(), order.items());

        // Append an item
        let item2 = seed_product_item(&db, "OI2", "P2", "Product 2", 2000, 2).await;
        order.add_item(item2);
        db.orders().update(&order).await.unwrap();

        let found = db.orders().find("O1").await.unwrap();
        assert_eq!(found.items().len(), 2);
        assert_eq!(found, order);
        assert_eq!(stored_total(&db, "O1").await, order.total().cents());

        // Replace the whole item set
        let item3 = seed_product_item(&db, "OI3", "P3", "Product 3", 1500, 3).await;
        let item4 = seed_product_item(&db, "OI4", "P4", "Product 4", 2500, 3).await;
        order.change_items(vec![item3, item4]).unwrap();
        db.orders().update(&order).await.unwrap();

        let found = db.orders().find("O1").await.unwrap();
        assert_eq!(found, order);
        assert_eq!(stored_total(&db, "O1").await, order.total().cents());
    }

    #[tokio::test]
    async fn test_replaced_items_leave_no_orphans() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        let item1 = seed_product_item(&db, "OI1", "P1", "Product 1", 100, 1).await;
        let item2 = seed_product_item(&db, "OI2", "P2", "Product 2", 200, 1).await;

        let mut order = Order::new("O1", "C1", vec![item1, item2]).unwrap();
        db.orders().create(&order).await.unwrap();
        assert_eq!(item_count(&db, "O1").await, 2);

        let item3 = seed_product_item(&db, "OI3", "P3", "Product 3", 300, 1).await;
        order.change_items(vec![item3]).unwrap();
        db.orders().update(&order).await.unwrap();

        // The stale OI1/OI2 rows must be gone, not just superseded
        assert_eq!(item_count(&db, "O1").await, 1);
        let remaining: String =
            sqlx::query_scalar("SELECT id FROM order_items WHERE order_id = ?1")
                .bind("O1")
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(remaining, "OI3");
    }

    #[tokio::test]
    async fn test_find_missing_order_is_not_found() {
        let db = db().await;

        let err = db.orders().find("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_order_is_not_found() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        let item = seed_product_item(&db, "OI1", "P1", "Product 1", 100, 1).await;

        let order = Order::new("O1", "C1", vec![item]).unwrap();
        let err = db.orders().update(&order).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_all_orders() {
        let db = db().await;
        seed_customer(&db, "C1", "Customer 1").await;
        seed_customer(&db, "C2", "Customer 2").await;
        let item1 = seed_product_item(&db, "OI1", "P1", "Product 1", 1000, 1).await;
        let item2 = seed_product_item(&db, "OI2", "P2", "Product 2", 1500, 2).await;

        let order1 = Order::new("O1", "C1", vec![item1]).unwrap();
        let order2 = Order::new("O2", "C2", vec![item2]).unwrap();
        db.orders().create(&order1).await.unwrap();
        db.orders().create(&order2).await.unwrap();

        let orders = db.orders().find_all().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.contains(&order1));
        assert!(orders.contains(&order2));
    }

    #[tokio::test]
    async fn test_order_requires_existing_customer() {
        let db = db().await;
        let item = seed_product_item(&db, "OI1", "P1", "Product 1", 100, 1).await;

        let order = Order::new("O1", "missing-customer", vec![item]).unwrap();
        let err = db.orders().create(&order).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
