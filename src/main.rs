use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

use stockroom::menu;
use stockroom::services::Inventory;

#[derive(Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Interactive terminal inventory tracker",
    long_about = "Stockroom is a single-user, in-memory inventory tracker \
                  operated through an interactive text menu: add stock items, \
                  sell quantities, and list current stock. State lives for the \
                  length of the session; nothing is persisted."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default when no command is given)
    #[command(alias = "ui")]
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Menu) | None => {
            let mut inventory = Inventory::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(&mut inventory, &mut stdin.lock(), &mut stdout.lock())?;
        }
    }

    Ok(())
}
