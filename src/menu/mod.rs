//! Interactive menu shell
//!
//! The text-menu front end over the inventory service. The loop is generic
//! over its reader and writer so whole sessions can be driven from tests
//! with in-memory buffers; `main` passes locked stdin and stdout.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::display::{format_item_list, format_sale_receipt};
use crate::error::InventoryResult;
use crate::services::Inventory;

use prompt::{prompt_price, prompt_quantity, prompt_token};

/// Run the interactive menu until the user exits or input ends
///
/// Every operation runs to completion before the next choice is read.
/// A closed input stream at any prompt terminates the loop cleanly with
/// a success result.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    reader: &mut R,
    writer: &mut W,
) -> InventoryResult<()> {
    writeln!(writer, "===========================================")?;
    writeln!(writer, "  Welcome to the Stockroom inventory!")?;
    writeln!(writer, "===========================================")?;

    loop {
        writeln!(writer)?;
        writeln!(writer, "Menu:")?;
        writeln!(writer, "  1. Add Item")?;
        writeln!(writer, "  2. Sell Item")?;
        writeln!(writer, "  3. List Items")?;
        writeln!(writer, "  4. Exit")?;

        let Some(choice) = prompt_token(reader, writer, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if add_item(inventory, reader, writer)?.is_none() {
                    break;
                }
            }
            "2" => {
                if sell_item(inventory, reader, writer)?.is_none() {
                    break;
                }
            }
            "3" => list_items(inventory, writer)?,
            "4" => {
                writeln!(writer)?;
                writeln!(writer, "Exiting. Goodbye!")?;
                return Ok(());
            }
            other => {
                writeln!(writer)?;
                writeln!(
                    writer,
                    "Invalid choice: '{}'. Please enter a number from 1 to 4.",
                    other
                )?;
            }
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Input closed. Exiting.")?;
    Ok(())
}

/// Add Item flow: prompt for the details, then append to the inventory
///
/// Returns `None` when input ends mid-prompt.
fn add_item<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    reader: &mut R,
    writer: &mut W,
) -> InventoryResult<Option<()>> {
    writeln!(writer)?;
    let Some(name) = prompt_token(reader, writer, "Enter item name: ")? else {
        return Ok(None);
    };
    let Some(quantity) = prompt_quantity(reader, writer, "Enter quantity: ")? else {
        return Ok(None);
    };
    let Some(price) = prompt_price(reader, writer, "Enter price: ")? else {
        return Ok(None);
    };

    match inventory.add_item(&name, quantity, price) {
        Ok(item) => writeln!(writer, "Added {}.", item)?,
        Err(err) => writeln!(writer, "{}", err)?,
    }

    Ok(Some(()))
}

/// Sell Item flow: prompt for name and quantity, then record the sale
fn sell_item<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    reader: &mut R,
    writer: &mut W,
) -> InventoryResult<Option<()>> {
    writeln!(writer)?;
    let Some(name) = prompt_token(reader, writer, "Enter item name to sell: ")? else {
        return Ok(None);
    };
    let Some(quantity) = prompt_quantity(reader, writer, "Enter quantity to sell: ")? else {
        return Ok(None);
    };

    writeln!(writer)?;
    match inventory.sell_item(&name, quantity) {
        Ok(receipt) => write!(writer, "{}", format_sale_receipt(&receipt))?,
        Err(err) if err.is_not_found() => writeln!(writer, "Item not found in inventory.")?,
        Err(err) if err.is_insufficient_stock() => writeln!(writer, "{}", err)?,
        Err(err) => return Err(err),
    }

    Ok(Some(()))
}

/// List Items flow: the stock table plus the running total earned
fn list_items<W: Write>(inventory: &Inventory, writer: &mut W) -> InventoryResult<()> {
    writeln!(writer)?;
    write!(writer, "{}", format_item_list(inventory.items()))?;
    writeln!(writer, "Total earned to date: {}", inventory.total_earned())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::io::Cursor;

    fn run_session(inventory: &mut Inventory, script: &str) -> String {
        let mut reader = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        run(inventory, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_list_sell_exit_session() {
        let mut inventory = Inventory::new();
        let output = run_session(
            &mut inventory,
            "1\nWidget\n10\n2.50\n3\n2\nwidget\n4\n3\n4\n",
        );

        assert!(output.contains("Welcome to the Stockroom inventory!"));
        assert!(output.contains("Added Widget (10 @ $2.50)."));
        assert!(output.contains("Sold 4 of Widget at $2.50 each."));
        assert!(output.contains("Money earned: $10.00"));
        assert!(output.contains("Total earned to date: $10.00"));
        assert!(output.contains("Exiting. Goodbye!"));

        assert_eq!(inventory.find("Widget").unwrap().quantity(), 6);
        assert_eq!(inventory.total_earned(), Money::from_cents(1000));
    }

    #[test]
    fn test_list_on_empty_inventory() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "3\n4\n");

        assert!(output.contains("Inventory is empty."));
        assert!(output.contains("Total earned to date: $0.00"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "9\n4\n");

        assert!(output.contains("Invalid choice: '9'"));
        // Menu shown again after the error
        assert_eq!(output.matches("  4. Exit").count(), 2);
        assert!(output.contains("Exiting. Goodbye!"));
    }

    #[test]
    fn test_sell_unknown_item_reports_not_found() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "2\nAnything\n1\n4\n");

        assert!(output.contains("Item not found in inventory."));
        assert!(inventory.total_earned().is_zero());
    }

    #[test]
    fn test_sell_too_many_reports_insufficient_stock() {
        let mut inventory = Inventory::new();
        inventory
            .add_item("Gadget", 1, Money::from_cents(999))
            .unwrap();
        let output = run_session(&mut inventory, "2\nGadget\n5\n4\n");

        assert!(output.contains("Not enough 'Gadget' in stock: requested 5, available 1"));
        assert_eq!(inventory.find("Gadget").unwrap().quantity(), 1);
    }

    #[test]
    fn test_depleting_sale_reports_removal() {
        let mut inventory = Inventory::new();
        inventory.add_item("Bolt", 3, Money::from_cents(10)).unwrap();
        let output = run_session(&mut inventory, "2\nBolt\n3\n4\n");

        assert!(output.contains("Item removed from inventory."));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_bad_numeric_input_reprompts_within_flow() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "1\nWidget\nlots\n-2\n10\n2.50\n4\n");

        assert_eq!(output.matches("Invalid input").count(), 2);
        assert!(output.contains("Added Widget (10 @ $2.50)."));
    }

    #[test]
    fn test_eof_at_menu_exits_cleanly() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "");

        assert!(output.contains("Input closed. Exiting."));
    }

    #[test]
    fn test_eof_mid_add_exits_cleanly() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "1\nWidget\n");

        assert!(output.contains("Input closed. Exiting."));
        assert!(inventory.is_empty());
    }
}
