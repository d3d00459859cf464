//! SQLite storage for time entries.
//!
//! ## Usage
//!
//! ```rust
//! use trackscribe::db::{db::Db, entries::Entries};
//! use trackscribe::libs::entry::NewEntry;
//! use trackscribe::libs::store::EntryStore;
//! use chrono::NaiveDate;
//!
//! let mut entries = Entries::with_db(Db::in_memory()?);
//! let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
//! let draft = NewEntry::new("owner-1", "call_01.wav", "Mantis", 1800, date, date.and_hms_opt(9, 0, 0).unwrap());
//! entries.create(&draft)?;
//! assert_eq!(entries.list("owner-1")?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::entry::{EntryPatch, EntryStatus, NewEntry, TimeEntry};
use crate::libs::error::{TrackError, TrackResult};
use crate::libs::store::EntryStore;
use anyhow::Result;
use rusqlite::types::{ToSql, Type};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_ENTRY: &str = "INSERT INTO entries
    (owner_id, file_name, client, duration_seconds, hours, minutes, seconds, date, created_at, status, link, notes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const SELECT_ENTRIES: &str = "SELECT id, owner_id, file_name, client, duration_seconds, hours, minutes, seconds, date, created_at, status, link, notes FROM entries";
const WHERE_OWNER: &str = "WHERE owner_id = ?1 ORDER BY created_at DESC, id DESC";
const WHERE_ID: &str = "WHERE id = ?1";
const DELETE_ENTRY: &str = "DELETE FROM entries WHERE id = ?1";

pub struct Entries {
    pub conn: Connection,
}

impl Entries {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Entries { conn: db.conn }
    }

    pub fn get_by_id(&self, id: i64) -> TrackResult<Option<TimeEntry>> {
        let entry = self
            .conn
            .query_row(&format!("{} {}", SELECT_ENTRIES, WHERE_ID), [id], map_entry)
            .optional()?;
        Ok(entry)
    }
}

fn map_entry(row: &Row) -> rusqlite::Result<TimeEntry> {
    let status: String = row.get(10)?;
    let status = status
        .parse::<EntryStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e)))?;

    Ok(TimeEntry {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        file_name: row.get(2)?,
        client: row.get(3)?,
        duration_seconds: row.get::<_, i64>(4)?.max(0) as u64,
        hours: row.get::<_, i64>(5)?.max(0) as u64,
        minutes: row.get::<_, i64>(6)?.max(0) as u64,
        seconds: row.get::<_, i64>(7)?.max(0) as u64,
        date: row.get(8)?,
        created_at: row.get(9)?,
        status,
        link: row.get(11)?,
        notes: row.get(12)?,
    })
}

fn to_sql_seconds(seconds: u64) -> TrackResult<i64> {
    i64::try_from(seconds).map_err(|_| TrackError::invalid_input(format!("duration {} is too large to store", seconds)))
}

impl EntryStore for Entries {
    fn list(&self, owner_id: &str) -> TrackResult<Vec<TimeEntry>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ENTRIES, WHERE_OWNER))?;
        let entries = stmt.query_map([owner_id], map_entry)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    fn create(&mut self, entry: &NewEntry) -> TrackResult<TimeEntry> {
        let parts = entry.parts();
        self.conn.execute(
            INSERT_ENTRY,
            params![
                entry.owner_id,
                entry.file_name,
                entry.client,
                to_sql_seconds(entry.duration_seconds)?,
                to_sql_seconds(parts.hours)?,
                to_sql_seconds(parts.minutes)?,
                to_sql_seconds(parts.seconds)?,
                entry.date,
                entry.created_at,
                entry.status.label(),
                entry.link,
                entry.notes,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, owner = %entry.owner_id, "entry created");
        Ok(TimeEntry::from_new(id, entry))
    }

    fn update(&mut self, id: i64, patch: &EntryPatch) -> TrackResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &patch.file_name {
            sets.push("file_name = ?");
            values.push(Box::new(name.clone()));
        }
        if let Some(client) = &patch.client {
            sets.push("client = ?");
            values.push(Box::new(client.clone()));
        }
        if let Some(seconds) = patch.duration_seconds {
            let parts = crate::libs::duration::DurationParts::from_seconds(seconds);
            sets.extend(["duration_seconds = ?", "hours = ?", "minutes = ?", "seconds = ?"]);
            values.push(Box::new(to_sql_seconds(seconds)?));
            values.push(Box::new(to_sql_seconds(parts.hours)?));
            values.push(Box::new(to_sql_seconds(parts.minutes)?));
            values.push(Box::new(to_sql_seconds(parts.seconds)?));
        }
        if let Some(date) = patch.date {
            sets.push("date = ?");
            values.push(Box::new(date));
        }
        if let Some(status) = patch.status {
            sets.push("status = ?");
            values.push(Box::new(status.label()));
        }
        if let Some(link) = &patch.link {
            sets.push("link = ?");
            values.push(Box::new(link.clone()));
        }
        if let Some(notes) = &patch.notes {
            sets.push("notes = ?");
            values.push(Box::new(notes.clone()));
        }
        values.push(Box::new(id));

        let sql = format!("UPDATE entries SET {} WHERE id = ?", sets.join(", "));
        let changed = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        if changed == 0 {
            return Err(TrackError::persistence(format!("entry {} not found", id)));
        }
        debug!(id, fields = sets.len(), "entry updated");
        Ok(())
    }

    fn delete(&mut self, id: i64) -> TrackResult<()> {
        let changed = self.conn.execute(DELETE_ENTRY, [id])?;
        if changed == 0 {
            return Err(TrackError::persistence(format!("entry {} not found", id)));
        }
        debug!(id, "entry deleted");
        Ok(())
    }
}
