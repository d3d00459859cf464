//! Interactive navigation between the overview, the timer and the file list.

use super::add::prompt_form;
use super::open_book;
use super::timer::{self, TimerArgs};
use crate::{
    libs::{
        aggregate::DashboardSummary,
        billing::compute_cycle,
        book::EntryForm,
        clock::{Clock, SystemClock},
        config::Config,
        entry::TimeEntry,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        navigation::{NavAction, Screen},
        query::{sort, SortDirection, SortKey},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;

enum MenuItem {
    Go(Screen),
    AddEntry,
    Export,
    Billing,
    Quit,
}

impl MenuItem {
    fn all() -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = Screen::ALL.into_iter().map(MenuItem::Go).collect();
        items.extend([MenuItem::AddEntry, MenuItem::Export, MenuItem::Billing, MenuItem::Quit]);
        items
    }

    fn label(&self) -> String {
        match self {
            MenuItem::Go(screen) => screen.to_string(),
            MenuItem::AddEntry => Message::MenuAddEntry.to_string(),
            MenuItem::Export => Message::MenuExport.to_string(),
            MenuItem::Billing => Message::MenuBilling.to_string(),
            MenuItem::Quit => Message::MenuQuit.to_string(),
        }
    }
}

pub async fn cmd() -> Result<()> {
    let (mut config, mut book) = open_book()?;
    let theme = ColorfulTheme::default();
    let clock = SystemClock;
    let items = MenuItem::all();
    let labels: Vec<String> = items.iter().map(MenuItem::label).collect();
    let mut screen = Screen::default();

    loop {
        match screen {
            Screen::Dashboard => {
                msg_print!(Message::DashboardHeader, true);
                match compute_cycle(&config.billing, clock.today()) {
                    Ok(cycle) => View::dashboard(&DashboardSummary::compute(book.entries(), cycle), config.decimal_places),
                    Err(e) => msg_error!(e),
                }
            }
            Screen::ListView => {
                msg_print!(Message::EntriesHeader, true);
                if book.entries().is_empty() {
                    msg_info!(Message::NoEntries);
                } else {
                    let rows = sort(book.entries().iter().collect(), SortKey::Date, SortDirection::Desc);
                    View::entries(&rows, config.decimal_places);
                }
            }
            Screen::Timer => {
                screen = match timer::run(&config, &mut book, TimerArgs::default()).await {
                    Ok(true) => screen.navigate(NavAction::TimerCompleted),
                    Ok(false) => Screen::Dashboard,
                    Err(e) => {
                        msg_error!(e);
                        Screen::Dashboard
                    }
                };
                continue;
            }
        }

        let current = items
            .iter()
            .position(|item| matches!(item, MenuItem::Go(s) if *s == screen))
            .unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::MenuPrompt.to_string())
            .items(&labels)
            .default(current)
            .interact()?;

        match &items[selected] {
            MenuItem::Go(target) => screen = screen.navigate(target.action()),
            MenuItem::AddEntry => {
                let mut form = EntryForm::blank(clock.today());
                if let Err(e) = prompt_form(&mut form, &config.clients) {
                    msg_error!(e);
                    continue;
                }
                match book.submit(&form, None, &clock) {
                    Ok(id) => {
                        msg_success!(Message::EntryCreated(id));
                        screen = screen.navigate(NavAction::EntrySaved);
                    }
                    Err(e) => msg_error!(Message::EntrySaveFailed(e.to_string())),
                }
            }
            MenuItem::Export => match export_cycle(&config, book.entries(), &clock) {
                Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
                Err(e) => msg_error!(e),
            },
            MenuItem::Billing => match Config::init().and_then(|updated| updated.save().map(|()| updated)) {
                Ok(updated) => {
                    config = updated;
                    msg_success!(Message::ConfigSaved);
                }
                Err(e) => msg_error!(e),
            },
            MenuItem::Quit => return Ok(()),
        }
    }
}

fn export_cycle(config: &Config, entries: &[TimeEntry], clock: &dyn Clock) -> Result<PathBuf> {
    let cycle = compute_cycle(&config.billing, clock.today())?;
    let exporter = Exporter::new(ExportFormat::Csv, None, config.decimal_places);
    exporter.export(ExportData::Cycle, entries, &cycle)
}
