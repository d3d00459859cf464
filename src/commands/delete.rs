use super::open_book;
use crate::{
    libs::messages::Message,
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let (_, mut book) = open_book()?;

    let Some(entry) = book.find(args.id) else {
        msg_bail_anyhow!(Message::EntryNotFound(args.id));
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(entry.file_name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    book.delete(args.id)?;
    msg_success!(Message::EntryDeleted(args.id));
    Ok(())
}
