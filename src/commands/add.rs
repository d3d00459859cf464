//! Adding entries, plus the entry fields and prompts shared with `edit`.

use super::open_book;
use crate::{
    libs::{
        book::EntryForm,
        clock::{Clock, SystemClock},
        duration::parse_duration,
        entry::EntryStatus,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Entry fields accepted on the command line. Anything left out is prompted for.
#[derive(Debug, Args, Default)]
pub struct EntryFields {
    /// File name; blank generates "Unnamed File N"
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub client: Option<String>,
    /// Duration as MM, MM:SS or HH:MM:SS (a bare number is minutes)
    #[arg(short, long)]
    pub time: Option<String>,
    /// Date worked (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
    #[arg(short, long, value_enum)]
    pub status: Option<EntryStatus>,
    #[arg(short, long)]
    pub link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl EntryFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.client.is_none()
            && self.time.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.link.is_none()
            && self.notes.is_none()
    }

    pub fn apply(&self, form: &mut EntryForm) {
        if let Some(name) = &self.name {
            form.file_name = name.clone();
        }
        if let Some(client) = &self.client {
            form.client = client.clone();
        }
        if let Some(time) = &self.time {
            form.time_string = time.trim().to_string();
        }
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(link) = &self.link {
            form.link = link.clone();
        }
        if let Some(notes) = &self.notes {
            form.notes = notes.clone();
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    fields: EntryFields,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let (config, mut book) = open_book()?;
    let clock = SystemClock;

    let mut form = EntryForm::blank(clock.today());
    args.fields.apply(&mut form);
    if args.fields.time.is_none() {
        prompt_form(&mut form, &config.clients)?;
    }

    let id = book.submit(&form, None, &clock)?;
    msg_success!(Message::EntryCreated(id));
    Ok(())
}

/// Walks the user through every field, offering the current values as defaults.
pub(crate) fn prompt_form(form: &mut EntryForm, clients: &[String]) -> Result<()> {
    let theme = ColorfulTheme::default();

    form.file_name = Input::with_theme(&theme)
        .with_prompt(Message::PromptFileName.to_string())
        .with_initial_text(form.file_name.clone())
        .allow_empty(true)
        .interact_text()?;

    form.client = select_client(&theme, clients, &form.client)?;

    let time: String = Input::with_theme(&theme)
        .with_prompt(format!("{} ({})", Message::PromptDuration, Message::DurationFormatHint))
        .with_initial_text(form.time_string.clone())
        .validate_with(|input: &String| parse_duration(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    form.set_time(&time);

    form.date = Input::with_theme(&theme)
        .with_prompt(Message::PromptEntryDate.to_string())
        .default(form.date)
        .interact_text()?;

    let statuses: Vec<&str> = EntryStatus::ALL.iter().map(|s| s.label()).collect();
    let current = EntryStatus::ALL.iter().position(|s| *s == form.status).unwrap_or(0);
    let selected = Select::with_theme(&theme)
        .with_prompt(Message::PromptStatus.to_string())
        .items(&statuses)
        .default(current)
        .interact()?;
    form.status = EntryStatus::ALL[selected];

    form.link = Input::with_theme(&theme)
        .with_prompt(Message::PromptLink.to_string())
        .with_initial_text(form.link.clone())
        .allow_empty(true)
        .interact_text()?;

    form.notes = Input::with_theme(&theme)
        .with_prompt(Message::PromptNotes.to_string())
        .with_initial_text(form.notes.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(())
}

pub(crate) fn select_client(theme: &ColorfulTheme, clients: &[String], current: &str) -> Result<String> {
    if clients.is_empty() {
        let client: String = Input::with_theme(theme)
            .with_prompt(Message::PromptClient.to_string())
            .with_initial_text(current.to_string())
            .interact_text()?;
        return Ok(client);
    }
    let default = clients.iter().position(|c| c == current).unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt(Message::PromptClient.to_string())
        .items(clients)
        .default(default)
        .interact()?;
    Ok(clients[selected].clone())
}
