//! Item model
//!
//! Represents one stock keeping unit held in the inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ids::ItemId;
use super::money::Money;

/// One stock keeping unit: a named lot with a quantity on hand and a unit price
///
/// Fields are private; all mutation goes through [`Item::set_quantity`] so the
/// modification timestamp stays accurate. The quantity is unsigned, which makes
/// negative stock unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: u32,
    price: Money,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item
    ///
    /// Price non-negativity is the caller's contract, checked via
    /// [`Item::validate`] before the item enters an inventory.
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Unique identifier of this lot
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity currently on hand
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price
    pub fn price(&self) -> Money {
        self.price
    }

    /// When this lot was added
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When this lot was last modified
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether `candidate` names this item: full-string equality under ASCII
    /// case folding. Not a substring or fuzzy match.
    pub fn matches(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
    }

    /// Overwrite the quantity unconditionally
    pub fn set_quantity(&mut self, new_quantity: u32) {
        self.quantity = new_quantity;
        self.updated_at = Utc::now();
    }

    /// Value of the stock on hand (unit price x quantity)
    pub fn value(&self) -> Money {
        self.price * self.quantity
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(ItemValidationError::NameTooLong(self.name.len()));
        }
        if self.price.is_negative() {
            return Err(ItemValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} @ {})", self.name, self.quantity, self.price)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name too long ({0} chars, max 100)")]
    NameTooLong(usize),
    #[error("Item price cannot be negative ({0})")]
    NegativePrice(Money),
}
