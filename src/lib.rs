//! Stockroom - interactive terminal inventory tracker
//!
//! This library provides the core functionality for the Stockroom CLI: a
//! single-user, in-memory inventory operated through a text menu. Stock
//! items are added, sold, and listed; a running total tracks the money
//! earned from sales. Nothing is persisted between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (items, ids, money)
//! - `services`: Business logic layer (the `Inventory` service)
//! - `display`: Terminal output formatting
//! - `menu`: The interactive shell and its validated input prompts
//!
//! # Example
//!
//! ```rust
//! use stockroom::models::Money;
//! use stockroom::services::Inventory;
//!
//! let mut inventory = Inventory::new();
//! inventory.add_item("Widget", 10, Money::from_cents(250))?;
//! let receipt = inventory.sell_item("widget", 2)?;
//! assert_eq!(receipt.proceeds, Money::from_cents(500));
//! # Ok::<(), stockroom::InventoryError>(())
//! ```

pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;

pub use error::{InventoryError, InventoryResult};
