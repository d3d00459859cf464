//! Command-line interface for trackscribe.
//!
//! Each subcommand lives in its own module with an `XArgs` struct and a
//! `cmd` entry point. [`Cli::menu`] parses the arguments and dispatches.

pub mod add;
pub mod billing;
pub mod dash;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod menu;
pub mod timer;

use crate::db::entries::Entries;
use crate::libs::book::EntryBook;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure billing, display and timer settings")]
    Init(init::InitArgs),
    #[command(about = "Add a time entry")]
    Add(add::AddArgs),
    #[command(about = "Edit a time entry")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a time entry")]
    Delete(delete::DeleteArgs),
    #[command(about = "List entries with filters and totals")]
    List(list::ListArgs),
    #[command(about = "Show the billing cycle overview")]
    Dash,
    #[command(about = "Show or change the billing cycle")]
    Billing(billing::BillingArgs),
    #[command(about = "Run the two-stage turnaround timer")]
    Timer(timer::TimerArgs),
    #[command(about = "Export the billing cycle or all entries")]
    Export(export::ExportArgs),
    #[command(about = "Import entries from a legacy JSON file")]
    Import(import::ImportArgs),
    #[command(about = "Interactive menu")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Dash => dash::cmd(),
            Commands::Billing(args) => billing::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Menu => menu::cmd().await,
        }
    }
}

/// Loads the configuration and the owner's entries from the default database.
pub(crate) fn open_book() -> Result<(Config, EntryBook<Entries>)> {
    let config = Config::read()?;
    let book = EntryBook::open(Entries::new()?, &config.owner_id)?;
    Ok((config, book))
}
