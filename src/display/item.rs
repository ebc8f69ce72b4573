//! Item display formatting
//!
//! Formats the inventory listing and sale receipts for terminal output.

use crate::models::Item;
use crate::services::SaleReceipt;

/// Format the inventory as a table, one row per lot in insertion order
///
/// Ends with a TOTAL row carrying the value of all stock on hand.
pub fn format_item_list(items: &[Item]) -> String {
    if items.is_empty() {
        return "Inventory is empty.\n".to_string();
    }

    // The id column is fixed width ("itm-" + 8 chars); the name column
    // grows with the longest name
    let name_width = items
        .iter()
        .map(|item| item.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>8}  {:>10}  {:>12}  {}\n",
        "ID",
        "Name",
        "Quantity",
        "Price",
        "Value",
        "Added",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->8}  {:->10}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>8}  {:>10}  {:>12}  {}\n",
            item.id().to_string(),
            item.name(),
            item.quantity(),
            item.price().to_string(),
            item.value().to_string(),
            item.created_at().format("%Y-%m-%d"),
            name_width = name_width,
        ));
    }

    let total_value: crate::models::Money = items.iter().map(Item::value).sum();

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->8}  {:->10}  {:->12}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>8}  {:>10}  {:>12}\n",
        "TOTAL",
        "",
        "",
        "",
        total_value.to_string(),
        name_width = name_width,
    ));

    output
}

/// Format a sale receipt
pub fn format_sale_receipt(receipt: &SaleReceipt) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Sold {} of {} at {} each.\n",
        receipt.quantity_sold, receipt.item_name, receipt.unit_price
    ));
    output.push_str(&format!("Money earned: {}\n", receipt.proceeds));

    if receipt.depleted {
        output.push_str("Item removed from inventory.\n");
    }

    output
}
