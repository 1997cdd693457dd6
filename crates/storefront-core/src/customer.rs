//! # Customer Entity
//!
//! Customer identity plus the Address value object it owns.
//!
//! ## Lifecycle
//! ```text
//! Customer::new ──► inactive, no address, 0 reward points
//!      │
//!      ├── change_address(addr)
//!      │
//!      ├── activate()  ← fails without an address on file
//!      │
//!      └── add_reward_points(n)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Address
// =============================================================================

/// A postal address. Value object with no identity of its own; always owned
/// by a [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: i64,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a new address, validating all fields are present.
    pub fn new(
        street: impl Into<String>,
        number: i64,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> ValidationResult<Self> {
        let address = Address {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> ValidationResult<()> {
        if self.street.is_empty() {
            return Err(ValidationError::required("Street"));
        }
        if self.number <= 0 {
            return Err(ValidationError::required("Number"));
        }
        if self.zip.is_empty() {
            return Err(ValidationError::required("Zip"));
        }
        if self.city.is_empty() {
            return Err(ValidationError::required("City"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer of the store.
///
/// ## Invariants
/// - `id` and `name` are non-empty
/// - a customer can only be activated once an address is on file
///
/// New customers start inactive with zero reward points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

impl Customer {
    /// Creates a new (inactive) customer.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Customer;
    ///
    /// let customer = Customer::new("c1", "Customer 1")?;
    /// assert!(!customer.is_active());
    /// # Ok::<(), storefront_core::ValidationError>(())
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> ValidationResult<Self> {
        let customer = Customer {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rehydrates a customer from persisted state, bypassing the default
    /// lifecycle but not the invariants.
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: i64,
    ) -> ValidationResult<Self> {
        let customer = Customer {
            id: id.into(),
            name: name.into(),
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> ValidationResult<()> {
        if self.id.is_empty() {
            return Err(ValidationError::required("Id"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::required("Name"));
        }
        Ok(())
    }

    /// Renames the customer. Fails when the new name is empty.
    pub fn change_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::required("Name"));
        }
        self.name = name;
        Ok(())
    }

    /// Sets or replaces the customer's address.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer. An address must be on file.
    pub fn activate(&mut self) -> ValidationResult<()> {
        if self.address.is_none() {
            return Err(ValidationError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    /// Deactivates the customer.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Adds reward points to the customer's balance.
    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points += points;
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

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
