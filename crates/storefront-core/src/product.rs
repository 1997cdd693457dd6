//! # Product Entity
//!
//! A product available for sale. Order items reference a product by id and
//! carry a snapshot of its name and price, so later product edits never
//! rewrite order history.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// ## Invariants
/// - `id` is non-empty
/// - `name` is non-empty
/// - `price` is never negative (zero is allowed for free items)
///
/// Fields are private; mutation goes through `change_name` / `change_price`,
/// which re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a new product, validating all invariants.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let product = Product::new("p1", "Coca-Cola 330ml", Money::from_cents(199))?;
    /// assert_eq!(product.name(), "Coca-Cola 330ml");
    /// # Ok::<(), storefront_core::ValidationError>(())
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> ValidationResult<Self> {
        let product = Product {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> ValidationResult<()> {
        if self.id.is_empty() {
            return Err(ValidationError::required("Id"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::required("Name"));
        }
        if self.price.is_negative() {
            return Err(ValidationError::Negative { field: "Price" });
        }
        Ok(())
    }

    /// Renames the product. Fails when the new name is empty.
    pub fn change_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::required("Name"));
        }
        self.name = name;
        Ok(())
    }

    /// Reprices the product. Fails when the new price is negative.
    pub fn change_price(&mut self, price: Money) -> ValidationResult<()> {
        if price.is_negative() {
            return Err(ValidationError::Negative { field: "Price" });
        }
        self.price = price;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
