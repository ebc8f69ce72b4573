//! Inventory service
//!
//! Owns the item collection and mediates every mutation: adding stock,
//! recording sales, and removing lots that sell down to zero. Also keeps
//! the running total of money earned across all sales.

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Item, ItemId, Money};

/// The in-memory inventory: an insertion-ordered collection of items plus
/// the cumulative sale proceeds
///
/// There is no uniqueness constraint on names. Adding an item whose name
/// matches an existing entry produces two independent lots; sell only ever
/// acts on the first match in insertion order.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    total_earned: Money,
}

/// Outcome of a successful sale, returned instead of printed so the core
/// stays testable without console I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleReceipt {
    pub item_id: ItemId,
    pub item_name: String,
    pub quantity_sold: u32,
    pub unit_price: Money,
    pub proceeds: Money,
    /// True when the sale brought the lot to zero and it was removed
    pub depleted: bool,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new lot to the end of the collection
    ///
    /// Returns a reference to the stored item. Duplicate names are legal;
    /// no merge is attempted.
    pub fn add_item(&mut self, name: &str, quantity: u32, price: Money) -> InventoryResult<&Item> {
        let item = Item::new(name.trim(), quantity, price);
        item.validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Sell `quantity` units of the first item matching `name`
    ///
    /// The scan stops at the first case-insensitive match regardless of
    /// outcome; a later duplicate is never considered. On success the
    /// proceeds are added to the running total, and a lot that reaches
    /// zero quantity is removed from the collection.
    pub fn sell_item(&mut self, name: &str, quantity: u32) -> InventoryResult<SaleReceipt> {
        let index = self
            .items
            .iter()
            .position(|item| item.matches(name))
            .ok_or_else(|| InventoryError::item_not_found(name))?;

        let item = &mut self.items[index];
        if quantity > item.quantity() {
            return Err(InventoryError::InsufficientStock {
                name: item.name().to_string(),
                requested: quantity,
                available: item.quantity(),
            });
        }

        let proceeds = item.price() * quantity;
        item.set_quantity(item.quantity() - quantity);
        self.total_earned += proceeds;

        let receipt = SaleReceipt {
            item_id: item.id(),
            item_name: item.name().to_string(),
            quantity_sold: quantity,
            unit_price: item.price(),
            proceeds,
            depleted: item.quantity() == 0,
        };

        if receipt.depleted {
            self.items.remove(index);
        }

        Ok(receipt)
    }

    /// First item matching `name`, if any
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of lots held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total money earned from sales over this inventory's lifetime
    ///
    /// Monotonically non-decreasing: never reset, never reduced.
    pub fn total_earned(&self) -> Money {
        self.total_earned
    }

    /// Value of all stock currently on hand
    pub fn stock_value(&self) -> Money {
        self.items.iter().map(Item::value).sum()
    }
}
