use super::open_book;
use crate::{
    libs::{clock::SystemClock, entry::LegacyRecord, messages::Message},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of legacy records
    file: PathBuf,
}

/// Imports legacy records for the current owner, filling in missing fields.
pub fn cmd(args: ImportArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file).map_err(|e| msg_error_anyhow!(Message::ImportReadFailed(e.to_string())))?;
    let records: Vec<LegacyRecord> = serde_json::from_str(&raw)?;

    let (_, mut book) = open_book()?;
    let count = book.import(records, &SystemClock)?;

    msg_success!(Message::ImportCompleted(count));
    Ok(())
}
