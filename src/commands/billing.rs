//! Showing and changing the billing cycle.

use super::open_book;
use crate::{
    libs::{
        aggregate::aggregate,
        billing::{compute_cycle, BillingConfig},
        clock::{Clock, SystemClock},
        config::Config,
        entry::EntryStatus,
        messages::Message,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BillingArgs {
    #[command(subcommand)]
    command: Option<BillingCommand>,
}

#[derive(Debug, Subcommand)]
enum BillingCommand {
    /// Show the active cycle and its completed totals
    Show,
    /// Cycles start on this day of every month
    Day { start_day: u32 },
    /// A single fixed cycle
    Range { start: NaiveDate, end: NaiveDate },
}

pub fn cmd(args: BillingArgs) -> Result<()> {
    match args.command.unwrap_or(BillingCommand::Show) {
        BillingCommand::Show => show(),
        BillingCommand::Day { start_day } => set(BillingConfig::DayOfMonth { start_day }),
        BillingCommand::Range { start, end } => set(BillingConfig::Range { start, end }),
    }
}

fn show() -> Result<()> {
    let (config, book) = open_book()?;
    let cycle = compute_cycle(&config.billing, SystemClock.today())?;
    let totals = aggregate(book.entries(), |e| e.status == EntryStatus::Completed && cycle.contains_opt(e.date));

    msg_print!(Message::BillingCycleHeader, true);
    View::billing_card(&cycle.label, &totals, config.decimal_places);
    Ok(())
}

fn set(billing: BillingConfig) -> Result<()> {
    billing.validate()?;
    let cycle = compute_cycle(&billing, SystemClock.today())?;

    let mut config = Config::read()?;
    config.billing = billing;
    config.save()?;

    msg_success!(Message::BillingSaved(cycle.label));
    Ok(())
}
