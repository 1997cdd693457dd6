//! # storefront-core: Pure Domain Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It contains the whole domain
//! model as plain values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Storefront Architecture                    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │            ★ storefront-core (THIS CRATE) ★           │  │
//! │  │                                                        │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐  │  │
//! │  │  │  order  │ │ product │ │ customer │ │   money    │  │  │
//! │  │  │  Order  │ │ Product │ │ Customer │ │   Money    │  │  │
//! │  │  │OrderItem│ │         │ │ Address  │ │  (cents)   │  │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘  │  │
//! │  │                                                        │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE VALUES       │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                             │                                │
//! │  ┌──────────────────────────▼────────────────────────────┐   │
//! │  │              storefront-db (Database Layer)           │   │
//! │  │          SQLite queries, migrations, repositories     │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - The Order aggregate and its OrderItem children
//! - [`customer`] - Customer entity and the Address value object
//! - [`product`] - Product entity
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Fail-fast construction**: every entity validates its invariants in its
//!    constructor and returns `Result` - no partially built entities
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer money**: all monetary values are in cents (i64)
//! 4. **Explicit errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, Order, OrderItem};
//!
//! let item = OrderItem::new("i1", "Item 1", Money::from_cents(100), "p1", 2)?;
//! let order = Order::new("o1", "c1", vec![item])?;
//!
//! assert_eq!(order.total(), Money::from_cents(200));
//! # Ok::<(), storefront_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Order` instead of
// `use storefront_core::order::Order`

pub use customer::{Address, Customer};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use order::{Order, OrderItem};
pub use product::Product;
