//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! Formatters build strings and never print, so they stay testable.

pub mod item;

pub use item::{format_item_list, format_sale_receipt};
