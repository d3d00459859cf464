//! The owner's entry list and the add/edit form behind it.
//!
//! [`EntryBook`] keeps a local copy of the owner's entries for the views. The
//! copy is never patched in place: after every successful write it is
//! replaced by a fresh `list` from the store, and after a failed write it is
//! left as it was.

use super::aggregate::generate_auto_name;
use super::clock::Clock;
use super::duration::{format_time_field, parse_duration, sanitize_time_input};
use super::entry::{EntryPatch, EntryStatus, LegacyRecord, NewEntry, TimeEntry};
use super::error::{TrackError, TrackResult};
use super::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Field values of the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub file_name: String,
    pub client: String,
    pub time_string: String,
    pub date: NaiveDate,
    pub link: String,
    pub notes: String,
    pub status: EntryStatus,
}

impl EntryForm {
    pub fn blank(today: NaiveDate) -> Self {
        EntryForm {
            file_name: String::new(),
            client: String::new(),
            time_string: String::new(),
            date: today,
            link: String::new(),
            notes: String::new(),
            status: EntryStatus::InProgress,
        }
    }

    /// Pre-fills the form for editing `entry`.
    pub fn from_entry(entry: &TimeEntry, today: NaiveDate) -> Self {
        EntryForm {
            file_name: entry.file_name.clone(),
            client: entry.client.clone(),
            time_string: format_time_field(entry.duration_seconds),
            date: entry.date.unwrap_or(today),
            link: entry.link.clone().unwrap_or_default(),
            notes: entry.notes.clone().unwrap_or_default(),
            status: entry.status,
        }
    }

    pub fn set_time(&mut self, raw: &str) {
        self.time_string = sanitize_time_input(raw);
    }

    fn duration_seconds(&self) -> TrackResult<u64> {
        parse_duration(&self.time_string)
    }

    fn resolved_name(&self, existing: &[TimeEntry]) -> String {
        let name = self.file_name.trim();
        if name.is_empty() {
            generate_auto_name(existing)
        } else {
            name.to_string()
        }
    }

    pub fn to_new_entry(&self, owner_id: &str, clock: &dyn Clock, existing: &[TimeEntry]) -> TrackResult<NewEntry> {
        let seconds = self.duration_seconds()?;
        Ok(NewEntry {
            owner_id: owner_id.to_string(),
            file_name: self.resolved_name(existing),
            client: self.client.trim().to_string(),
            duration_seconds: seconds,
            date: Some(self.date),
            created_at: clock.now(),
            status: self.status,
            link: non_empty(&self.link),
            notes: non_empty(&self.notes),
        })
    }

    pub fn to_patch(&self, existing: &[TimeEntry]) -> TrackResult<EntryPatch> {
        let seconds = self.duration_seconds()?;
        Ok(EntryPatch {
            file_name: Some(self.resolved_name(existing)),
            client: Some(self.client.trim().to_string()),
            duration_seconds: Some(seconds),
            date: Some(Some(self.date)),
            status: Some(self.status),
            link: Some(non_empty(&self.link)),
            notes: Some(non_empty(&self.notes)),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct EntryBook<S: EntryStore> {
    store: S,
    owner_id: String,
    entries: Vec<TimeEntry>,
}

impl<S: EntryStore> EntryBook<S> {
    pub fn open(store: S, owner_id: &str) -> TrackResult<Self> {
        let mut book = EntryBook {
            store,
            owner_id: owner_id.to_string(),
            entries: Vec::new(),
        };
        book.refresh()?;
        Ok(book)
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn find(&self, id: i64) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Direct store access for the timer, which writes on its own. Call
    /// [`refresh`](Self::refresh) afterwards.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn refresh(&mut self) -> TrackResult<()> {
        self.entries = self.store.list(&self.owner_id)?;
        debug!(owner = %self.owner_id, count = self.entries.len(), "entries refreshed");
        Ok(())
    }

    /// Creates an entry from `form`, or updates entry `editing`.
    ///
    /// Returns the id of the written entry.
    pub fn submit(&mut self, form: &EntryForm, editing: Option<i64>, clock: &dyn Clock) -> TrackResult<i64> {
        let id = match editing {
            Some(id) => {
                if self.find(id).is_none() {
                    return Err(TrackError::invalid_input(format!("entry {} does not exist", id)));
                }
                let others: Vec<TimeEntry> = self.entries.iter().filter(|e| e.id != id).cloned().collect();
                let patch = form.to_patch(&others)?;
                self.store.update(id, &patch)?;
                id
            }
            None => {
                let new_entry = form.to_new_entry(&self.owner_id, clock, &self.entries)?;
                self.store.create(&new_entry)?.id
            }
        };
        self.refresh()?;
        Ok(id)
    }

    pub fn delete(&mut self, id: i64) -> TrackResult<()> {
        if self.find(id).is_none() {
            return Err(TrackError::invalid_input(format!("entry {} does not exist", id)));
        }
        self.store.delete(id)?;
        self.refresh()
    }

    /// Stores legacy records for this owner. Returns how many were written.
    pub fn import(&mut self, records: Vec<LegacyRecord>, clock: &dyn Clock) -> TrackResult<usize> {
        let imported_at = clock.now();
        let mut written = 0;
        let mut result = Ok(());
        for record in records {
            let mut new_entry = record.into_new_entry(&self.owner_id, imported_at);
            if new_entry.file_name.trim().is_empty() {
                new_entry.file_name = generate_auto_name(&self.store.list(&self.owner_id)?);
            }
            if let Err(e) = self.store.create(&new_entry) {
                result = Err(e);
                break;
            }
            written += 1;
        }
        self.refresh()?;
        result.map(|_| written)
    }
}
