//! # Customer Repository
//!
//! Database operations for customers.
//!
//! The optional address is flattened into nullable columns on the customers
//! table (street/number/zip/city are either all set or all null).

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::Repository;
use storefront_core::{Address, Customer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

/// Raw customer row as stored in SQLite.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    street: Option<String>,
    number: Option<i64>,
    zip: Option<String>,
    city: Option<String>,
    active: bool,
    reward_points: i64,
}

impl CustomerRow {
    /// Reconstructs the domain entity. Rows written by this crate always
    /// pass validation; anything else surfaces as `DbError::InvalidState`.
    fn into_customer(self) -> DbResult<Customer> {
        let address = match (self.street, self.number, self.zip, self.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => {
                Some(Address::new(street, number, zip, city)?)
            }
            _ => None,
        };

        let customer = Customer::restore(
            self.id,
            self.name,
            address,
            self.active,
            self.reward_points,
        )?;
        Ok(customer)
    }
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    async fn create(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id(), "Inserting customer");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO customers (
                id, name, street, number, zip, city,
                active, reward_points, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(customer.address().map(Address::street))
        .bind(customer.address().map(Address::number))
        .bind(customer.address().map(Address::zip))
        .bind(customer.address().map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id(), "Updating customer");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                name = ?2,
                street = ?3,
                number = ?4,
                zip = ?5,
                city = ?6,
                active = ?7,
                reward_points = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(customer.address().map(Address::street))
        .bind(customer.address().map(Address::number))
        .bind(customer.address().map(Address::zip))
        .bind(customer.address().map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", customer.id()));
        }

        Ok(())
    }

    async fn find(&self, id: &str) -> DbResult<Customer> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, name, street, number, zip, city, active, reward_points
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_customer(),
            None => Err(DbError::not_found("Customer", id)),
        }
    }

    async fn find_all(&self) -> DbResult<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, name, street, number, zip, city, active, reward_points
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CustomerRow::into_customer).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
