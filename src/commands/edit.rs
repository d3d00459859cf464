use super::add::{prompt_form, EntryFields};
use super::open_book;
use crate::{
    libs::{
        book::EntryForm,
        clock::{Clock, SystemClock},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry id, as shown by `list`
    id: i64,
    #[command(flatten)]
    fields: EntryFields,
}

/// Edits an entry in place. Without field flags every field is prompted for.
pub fn cmd(args: EditArgs) -> Result<()> {
    let (config, mut book) = open_book()?;
    let clock = SystemClock;

    let Some(entry) = book.find(args.id) else {
        msg_bail_anyhow!(Message::EntryNotFound(args.id));
    };
    View::entry(entry);

    let mut form = EntryForm::from_entry(entry, clock.today());
    if args.fields.is_empty() {
        prompt_form(&mut form, &config.clients)?;
    } else {
        args.fields.apply(&mut form);
    }

    book.submit(&form, Some(args.id), &clock)?;
    msg_success!(Message::EntryUpdated(args.id));
    Ok(())
}
