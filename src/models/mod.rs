//! Core data models for Stockroom
//!
//! This module contains the data structures that represent the inventory
//! domain: items, item identifiers, and monetary amounts.

pub mod ids;
pub mod item;
pub mod money;

pub use ids::ItemId;
pub use item::{Item, ItemValidationError};
pub use money::{Money, MoneyParseError};
