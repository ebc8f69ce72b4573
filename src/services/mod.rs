//! Service layer for Stockroom
//!
//! The service layer provides the business logic over the in-memory item
//! collection: adding stock, recording sales, and the list projections.

pub mod inventory;

pub use inventory::{Inventory, SaleReceipt};
