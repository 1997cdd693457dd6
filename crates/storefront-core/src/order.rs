//! # Order Aggregate
//!
//! The Order aggregate and its OrderItem children.
//!
//! ## Aggregate Boundary
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Order (aggregate root)                  │
//! │                                                              │
//! │   id ── customer_id ── items: [OrderItem, OrderItem, ...]    │
//! │                                │                             │
//! │                                └── owned exclusively;        │
//! │                                    mutated only through      │
//! │                                    add_item / change_items   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items snapshot the product's name and price at creation time
//! (`product_id` is a reference, not a live foreign key in the domain layer),
//! so catalog edits never rewrite order history.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
///
/// ## Invariants
/// - `quantity` is strictly positive
///
/// Immutable after construction; the owning [`Order`] replaces items rather
/// than editing them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: String,
    /// Product name at the time the item was added (frozen).
    name: String,
    /// Unit price at the time the item was added (frozen).
    price: Money,
    product_id: String,
    quantity: i64,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// Fails with "Quantity must be greater than 0" when `quantity <= 0`.
    /// No other field is validated here; id/name/product_id come from
    /// already-validated entities.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<String>,
        quantity: i64,
    ) -> ValidationResult<Self> {
        if quantity <= 0 {
            return Err(ValidationError::NotPositive { field: "Quantity" });
        }

        Ok(OrderItem {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        })
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn total(&self) -> Money {
        self.price * self.quantity
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

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a customer.
///
/// ## Invariants
/// - `id` and `customer_id` are non-empty
/// - `items` is a non-empty, ordered sequence
///
/// Fields are private: the item list can only change through [`Order::add_item`]
/// and [`Order::change_items`]. Mutation re-validates, so the constructor
/// invariants hold for the aggregate's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new order, validating all invariants.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Order, OrderItem};
    ///
    /// let item = OrderItem::new("i1", "Item 1", Money::from_cents(100), "p1", 2)?;
    /// let order = Order::new("o1", "c1", vec![item])?;
    /// assert_eq!(order.total(), Money::from_cents(200));
    /// # Ok::<(), storefront_core::ValidationError>(())
    /// ```
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> ValidationResult<Self> {
        let order = Order {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> ValidationResult<()> {
        if self.id.is_empty() {
            return Err(ValidationError::required("Id"));
        }
        if self.customer_id.is_empty() {
            return Err(ValidationError::required("CustomerId"));
        }
        if self.items.is_empty() {
            return Err(ValidationError::ItemsRequired);
        }
        Ok(())
    }

    /// Order total: Σ(price × quantity) over all items.
    ///
    /// Recomputed on demand, never cached. The persistence layer denormalizes
    /// this value into the stored row on every write.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Reassigns the order to another customer.
    ///
    /// Fails when the new id is empty (same rule as the constructor).
    pub fn change_customer_id(&mut self, customer_id: impl Into<String>) -> ValidationResult<()> {
        let customer_id = customer_id.into();
        if customer_id.is_empty() {
            return Err(ValidationError::required("CustomerId"));
        }
        self.customer_id = customer_id;
        Ok(())
    }

    /// Appends an item, preserving the order of existing items.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Replaces the entire item list.
    ///
    /// Fails when the new list is empty (same rule as the constructor); the
    /// order is left untouched in that case.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> ValidationResult<()> {
        if items.is_empty() {
            return Err(ValidationError::ItemsRequired);
        }
        self.items = items;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, price_cents: i64, product_id: &str, qty: i64) -> OrderItem {
        OrderItem::new(id, name, Money::from_cents(price_cents), product_id, qty).unwrap()
    }

    #[test]
    fn test_empty_id_fails() {
        let err = Order::new("", "123", vec![item("i1", "Item 1", 100, "p1", 1)]).unwrap_err();
        assert_eq!(err.to_string(), "Id is required");
    }

    #[test]
    fn test_empty_customer_id_fails() {
        let err = Order::new("123", "", vec![item("i1", "Item 1", 100, "p1", 1)]).unwrap_err();
        assert_eq!(err.to_string(), "CustomerId is required");
    }

    #[test]
    fn test_empty_items_fails() {
        let err = Order::new("123", "123", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "Items are required");
    }

    #[test]
    fn test_total() {
        let item1 = item("i1", "Item 1", 100, "p1", 2);
        let item2 = item("i2", "Item 2", 200, "p2", 2);

        let order = Order::new("o1", "c1", vec![item1.clone()]).unwrap();
        assert_eq!(order.total(), Money::from_cents(200));

        let order2 = Order::new("o1", "c1", vec![item1, item2]).unwrap();
        assert_eq!(order2.total(), Money::from_cents(600));
    }

    #[test]
    fn test_item_quantity_must_be_positive() {
        let err = OrderItem::new("i1", "Item 1", Money::from_cents(100), "p1", 0).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");

        let err = OrderItem::new("i1", "Item 1", Money::from_cents(100), "p1", -3).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");
    }

    #[test]
    fn test_item_total() {
        let item = item("i1", "Item 1", 100, "p1", 2);
        assert_eq!(item.total(), Money::from_cents(200));
    }

    #[test]
    fn test_change_customer_id() {
        let mut order = Order::new("O1", "C1", vec![item("1", "Product 1", 15, "P1", 2)]).unwrap();

        order.change_customer_id("C2").unwrap();
        assert_eq!(order.customer_id(), "C2");
    }

    #[test]
    fn test_change_customer_id_rejects_empty() {
        let mut order = Order::new("O1", "C1", vec![item("1", "Product 1", 15, "P1", 2)]).unwrap();

        let err = order.change_customer_id("").unwrap_err();
        assert_eq!(err.to_string(), "CustomerId is required");
        assert_eq!(order.customer_id(), "C1");
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let item1 = item("1", "Product 1", 15, "P1", 2);
        let item2 = item("2", "Product 2", 25, "P2", 3);

        let mut order = Order::new("O1", "C1", vec![item1.clone()]).unwrap();
        order.add_item(item2.clone());

        assert_eq!(order.items(), &[item1, item2]);
        assert_eq!(order.total(), Money::from_cents(105));
    }

    #[test]
    fn test_change_items_replaces_everything() {
        let mut order = Order::new("O1", "C1", vec![item("1", "Product 1", 15, "P1", 2)]).unwrap();

        let item3 = item("3", "Product 3", 20, "P3", 1);
        let item4 = item("4", "Product 4", 30, "P4", 4);
        order.change_items(vec![item3.clone(), item4.clone()]).unwrap();

        assert_eq!(order.items(), &[item3, item4]);
        assert_eq!(order.total(), Money::from_cents(140));
    }

    #[test]
    fn test_change_items_rejects_empty() {
        let original = item("1", "Product 1", 15, "P1", 2);
        let mut order = Order::new("O1", "C1", vec![original.clone()]).unwrap();

        let err = order.change_items(vec![]).unwrap_err();
        assert_eq!(err.to_string(), "Items are required");
        assert_eq!(order.items(), &[original]);
    }

    #[test]
    fn test_json_round_trip() {
        let order = Order::new(
            "o1",
            "c1",
            vec![item("i1", "Item 1", 100, "p1", 2), item("i2", "Item 2", 200, "p2", 2)],
        )
        .unwrap();

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
