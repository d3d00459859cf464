use super::open_book;
use crate::{
    libs::{
        billing::compute_cycle,
        clock::{Clock, SystemClock},
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export: the active billing cycle statement or every entry
    #[arg(value_enum, default_value = "cycle")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file. Defaults to `trackscribe_export_<timestamp>.<ext>`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (config, book) = open_book()?;
    let cycle = compute_cycle(&config.billing, SystemClock.today())?;

    let exporter = Exporter::new(args.format, args.output, config.decimal_places);
    let path = exporter.export(args.data, book.entries(), &cycle)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
