//! Filtering and ordering entries for the list view.

use super::entry::TimeEntry;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Client value that disables the client filter.
pub const ALL_CLIENTS: &str = "All";

/// List-view filter. Every set field must match.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-insensitive substring of the file name.
    pub text: Option<String>,
    pub date: Option<NaiveDate>,
    /// Exact client, ignored when `None` or [`ALL_CLIENTS`].
    pub client: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        let text_ok = match self.text.as_deref().filter(|t| !t.is_empty()) {
            Some(text) => entry.file_name.to_lowercase().contains(&text.to_lowercase()),
            None => true,
        };
        let date_ok = self.date.map_or(true, |d| entry.date == Some(d));
        let client_ok = match self.client.as_deref() {
            None | Some(ALL_CLIENTS) => true,
            Some(client) => entry.client == client,
        };
        text_ok && date_ok && client_ok
    }
}

pub fn filter<'a>(entries: &'a [TimeEntry], filter: &EntryFilter) -> Vec<&'a TimeEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Date,
    Client,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

fn compare(a: &TimeEntry, b: &TimeEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Client => a.client.to_lowercase().cmp(&b.client.to_lowercase()),
        SortKey::Status => a.status.rank().cmp(&b.status.rank()),
    }
}

/// Stable sort: entries with equal keys keep their input order in both
/// directions.
pub fn sort<'a>(mut entries: Vec<&'a TimeEntry>, key: SortKey, direction: SortDirection) -> Vec<&'a TimeEntry> {
    entries.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b, key),
        SortDirection::Desc => compare(b, a, key),
    });
    entries
}
