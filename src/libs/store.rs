//! Persistence seam for time entries.
//!
//! The tracking core never talks to SQLite directly; it goes through
//! [`EntryStore`]. [`crate::db::entries::Entries`] is the on-disk
//! implementation; [`MemoryStore`] keeps entries in a `Vec` for tests and dry
//! runs.

use super::entry::{EntryPatch, NewEntry, TimeEntry};
use super::error::{TrackError, TrackResult};

pub trait EntryStore {
    /// All entries belonging to `owner_id`, newest first.
    fn list(&self, owner_id: &str) -> TrackResult<Vec<TimeEntry>>;
    fn create(&mut self, entry: &NewEntry) -> TrackResult<TimeEntry>;
    fn update(&mut self, id: i64, patch: &EntryPatch) -> TrackResult<()>;
    fn delete(&mut self, id: i64) -> TrackResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<TimeEntry>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl EntryStore for MemoryStore {
    fn list(&self, owner_id: &str) -> TrackResult<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> = self.entries.iter().filter(|e| e.owner_id == owner_id).cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    fn create(&mut self, entry: &NewEntry) -> TrackResult<TimeEntry> {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let stored = TimeEntry::from_new(id, entry);
        self.entries.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, id: i64, patch: &EntryPatch) -> TrackResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackError::persistence(format!("entry {} not found", id)))?;
        entry.apply(patch);
        Ok(())
    }

    fn delete(&mut self, id: i64) -> TrackResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(TrackError::persistence(format!("entry {} not found", id)));
        }
        Ok(())
    }
}
