//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! storefront-core errors (this file)
//! └── ValidationError  - Entity invariant violations
//!
//! storefront-db errors (separate crate)
//! └── DbError          - Database operation failures
//!
//! Flow: ValidationError → DbError → caller
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a stable, user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Entity invariant violations, raised at construction or mutation time.
///
/// Construction is fail-fast: a constructor either returns a fully valid
/// entity or one of these variants, never a half-built value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    ///
    /// Produces messages like "Id is required", "CustomerId is required".
    #[error("{field} is required")]
    Required { field: &'static str },

    /// An order was given an empty item list.
    #[error("Items are required")]
    ItemsRequired,

    /// Numeric value must be strictly positive.
    ///
    /// Produces "Quantity must be greater than 0".
    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    /// Numeric value must not be negative (zero is allowed, e.g. free items).
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Customer activation requires an address on file.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,
}

impl ValidationError {
    /// Creates a Required error for the given field name.
    pub const fn required(field: &'static str) -> Self {
        ValidationError::Required { field }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
