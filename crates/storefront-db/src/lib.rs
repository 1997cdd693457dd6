//! # storefront-db: Database Layer for Storefront
//!
//! This crate provides database access for the Storefront domain model.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Storefront Data Flow                       │
//! │                                                              │
//! │  Application layer (out of scope)                            │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │               storefront-db (THIS CRATE)               │  │
//! │  │                                                        │  │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌──────────────┐   │  │
//! │  │  │  Database  │  │ Repositories │  │  Migrations  │   │  │
//! │  │  │ (pool.rs)  │  │ customer.rs  │  │  (embedded)  │   │  │
//! │  │  │            │◄─│ product.rs   │  │ 001_init.sql │   │  │
//! │  │  │ SqlitePool │  │ order.rs     │  │              │   │  │
//! │  │  └────────────┘  └──────────────┘  └──────────────┘   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite Database                                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (customer, product, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{Database, DbConfig, Repository};
//!
//! let db = Database::new(DbConfig::new("path/to/store.db")).await?;
//!
//! db.orders().create(&order).await?;
//! let found = db.orders().find(order.id()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::Repository;

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
