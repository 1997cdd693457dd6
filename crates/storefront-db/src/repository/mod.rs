//! # Repository Module
//!
//! Database repository implementations for Storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │             Repository Pattern Explained                     │
//! │                                                              │
//! │  Caller                                                      │
//! │    │   db.orders().find("O1")                                │
//! │    ▼                                                         │
//! │  OrderRepository: Repository<Order>                          │
//! │  ├── create(&self, order)                                    │
//! │  ├── update(&self, order)                                    │
//! │  ├── find(&self, id)                                         │
//! │  └── find_all(&self)                                         │
//! │    │   SQL                                                   │
//! │    ▼                                                         │
//! │  SQLite Database                                             │
//! │                                                              │
//! │  Benefits:                                                   │
//! │  • SQL is isolated in one place                              │
//! │  • Domain stays free of persistence concerns                 │
//! │  • Can swap database implementations behind the trait        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`] - Customer rows (address flattened into columns)
//! - [`ProductRepository`] - Product rows
//! - [`OrderRepository`] - Order aggregate (orders + order_items)

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;

pub mod customer;
pub mod order;
pub mod product;

pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

// =============================================================================
// Repository Trait
// =============================================================================

/// Common persistence interface implemented by every repository.
///
/// Keeps the storage mechanism substitutable: callers depend on this trait,
/// not on SQLite specifics.
#[async_trait]
pub trait Repository<T> {
    /// Persists a new entity. Fails on duplicate id.
    async fn create(&self, entity: &T) -> DbResult<()>;

    /// Rewrites an existing entity's persisted state.
    /// Fails with `DbError::NotFound` when no row exists for its id.
    async fn update(&self, entity: &T) -> DbResult<()>;

    /// Loads one entity by id, or `DbError::NotFound`.
    async fn find(&self, id: &str) -> DbResult<T>;

    /// Loads every persisted entity.
    async fn find_all(&self) -> DbResult<Vec<T>>;
}

// =============================================================================
// ID Generation
// =============================================================================

/// Generates a new entity ID (UUID v4 string).
///
/// Entities accept any non-empty string id; callers that don't have a natural
/// key use this.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
