use super::open_book;
use crate::{
    libs::{
        messages::Message,
        query::{filter, sort, EntryFilter, SortDirection, SortKey},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive search on the file name
    #[arg(short, long)]
    search: Option<String>,
    /// Only entries worked on this date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Only entries for this client; "All" disables the filter
    #[arg(short, long)]
    client: Option<String>,
    #[arg(long, value_enum, default_value = "date")]
    sort: SortKey,
    #[arg(long, value_enum, default_value = "desc")]
    direction: SortDirection,
}

impl ListArgs {
    fn filter(&self) -> EntryFilter {
        EntryFilter {
            text: self.search.clone(),
            date: self.date,
            client: self.client.clone(),
        }
    }
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let (config, book) = open_book()?;
    if book.entries().is_empty() {
        msg_info!(Message::NoEntries);
        return Ok(());
    }

    let rows = sort(filter(book.entries(), &args.filter()), args.sort, args.direction);
    if rows.is_empty() {
        msg_info!(Message::NoEntriesMatching);
        return Ok(());
    }

    msg_print!(Message::EntriesHeader, true);
    View::entries(&rows, config.decimal_places);
    Ok(())
}
