//! Time entry model: one processed audio file.
//!
//! Entries carry a canonical `duration_seconds` plus a cached
//! hours/minutes/seconds decomposition. [`NewEntry`] is what the form and the
//! timer hand to the store; [`EntryPatch`] is a partial update; and
//! [`LegacyRecord`] reads rows exported by older revisions of the tracker
//! whose field set varied.

use super::duration::DurationParts;
use super::error::TrackError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank given to status labels the tracker does not know.
pub const UNKNOWN_STATUS_RANK: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum EntryStatus {
    #[serde(rename = "In Progress")]
    #[value(name = "in-progress")]
    InProgress,
    #[serde(rename = "Pending QA")]
    #[value(name = "pending-qa")]
    PendingQA,
    #[serde(rename = "Completed")]
    #[value(name = "completed")]
    Completed,
}

impl EntryStatus {
    pub const ALL: [EntryStatus; 3] = [EntryStatus::InProgress, EntryStatus::PendingQA, EntryStatus::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::InProgress => "In Progress",
            EntryStatus::PendingQA => "Pending QA",
            EntryStatus::Completed => "Completed",
        }
    }

    /// Position in the workflow, used when sorting by status.
    pub fn rank(&self) -> u8 {
        status_rank(self.label())
    }
}

/// Sort rank for a status label: In Progress 1, Pending QA 2, Completed 3,
/// anything else [`UNKNOWN_STATUS_RANK`].
pub fn status_rank(label: &str) -> u8 {
    match label {
        "In Progress" => 1,
        "Pending QA" => 2,
        "Completed" => 3,
        _ => UNKNOWN_STATUS_RANK,
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntryStatus {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrackError::invalid_input(format!("unknown status '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub owner_id: String,
    pub file_name: String,
    pub client: String,
    pub duration_seconds: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub status: EntryStatus,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Builds a stored entry from a draft and the id the store assigned.
    pub fn from_new(id: i64, new: &NewEntry) -> Self {
        let parts = DurationParts::from_seconds(new.duration_seconds);
        TimeEntry {
            id,
            owner_id: new.owner_id.clone(),
            file_name: new.file_name.clone(),
            client: new.client.clone(),
            duration_seconds: new.duration_seconds,
            hours: parts.hours,
            minutes: parts.minutes,
            seconds: parts.seconds,
            date: new.date,
            created_at: new.created_at,
            status: new.status,
            link: new.link.clone(),
            notes: new.notes.clone(),
        }
    }

    /// Applies a partial update, keeping the decomposition in step.
    pub fn apply(&mut self, patch: &EntryPatch) {
        if let Some(name) = &patch.file_name {
            self.file_name = name.clone();
        }
        if let Some(client) = &patch.client {
            self.client = client.clone();
        }
        if let Some(seconds) = patch.duration_seconds {
            self.set_duration(seconds);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(link) = &patch.link {
            self.link = link.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }

    pub fn set_duration(&mut self, seconds: u64) {
        let parts = DurationParts::from_seconds(seconds);
        self.duration_seconds = seconds;
        self.hours = parts.hours;
        self.minutes = parts.minutes;
        self.seconds = parts.seconds;
    }
}

/// An entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub owner_id: String,
    pub file_name: String,
    pub client: String,
    pub duration_seconds: u64,
    pub date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub status: EntryStatus,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl NewEntry {
    pub fn new(owner_id: &str, file_name: &str, client: &str, duration_seconds: u64, date: NaiveDate, created_at: NaiveDateTime) -> Self {
        NewEntry {
            owner_id: owner_id.to_string(),
            file_name: file_name.to_string(),
            client: client.to_string(),
            duration_seconds,
            date: Some(date),
            created_at,
            status: EntryStatus::InProgress,
            link: None,
            notes: None,
        }
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn parts(&self) -> DurationParts {
        DurationParts::from_seconds(self.duration_seconds)
    }
}

/// Partial update. `None` leaves a field untouched; for the optional columns
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub file_name: Option<String>,
    pub client: Option<String>,
    pub duration_seconds: Option<u64>,
    pub date: Option<Option<NaiveDate>>,
    pub status: Option<EntryStatus>,
    pub link: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl EntryPatch {
    pub fn status(status: EntryStatus, notes: &str) -> Self {
        EntryPatch {
            status: Some(status),
            notes: Some(Some(notes.to_string())),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }
}

/// A job row as exported by older revisions of the tracker.
///
/// Field names follow those exports. Any of the duration fields may be missing;
/// see [`LegacyRecord::canonical_seconds`] for the fallback order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub total_seconds: Option<u64>,
    #[serde(default)]
    pub total_minutes: Option<u64>,
    #[serde(default)]
    pub hours: Option<u64>,
    #[serde(default)]
    pub minutes: Option<u64>,
    #[serde(default)]
    pub seconds: Option<u64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl LegacyRecord {
    /// Elapsed seconds: `total_seconds`, else the h/m/s columns, else
    /// `total_minutes * 60`, else zero.
    pub fn canonical_seconds(&self) -> u64 {
        if let Some(total) = self.total_seconds.filter(|s| *s > 0) {
            return total;
        }
        if self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some() {
            let parts = DurationParts {
                hours: self.hours.unwrap_or(0),
                minutes: self.minutes.unwrap_or(0),
                seconds: self.seconds.unwrap_or(0),
            };
            let total = parts.total_seconds();
            if total > 0 {
                return total;
            }
        }
        self.total_minutes.unwrap_or(0) * 60
    }

    /// Converts into a draft for `owner_id`. Unknown or missing statuses fall
    /// back to In Progress; a missing timestamp falls back to the entry date
    /// at midnight, then to `imported_at`.
    pub fn into_new_entry(self, owner_id: &str, imported_at: NaiveDateTime) -> NewEntry {
        let duration_seconds = self.canonical_seconds();
        let status = match self.status.as_deref() {
            Some(label) => label.parse().unwrap_or_else(|_| {
                tracing::warn!(label, "unknown legacy status, defaulting to In Progress");
                EntryStatus::InProgress
            }),
            None => EntryStatus::InProgress,
        };
        let created_at = self
            .created_at
            .as_deref()
            .and_then(parse_legacy_timestamp)
            .or_else(|| self.date.and_then(|d| d.and_hms_opt(0, 0, 0)))
            .unwrap_or(imported_at);

        NewEntry {
            owner_id: owner_id.to_string(),
            file_name: self.file_name.unwrap_or_default(),
            client: self.client.unwrap_or_default(),
            duration_seconds,
            date: self.date,
            created_at,
            status,
            link: self.link.filter(|l| !l.is_empty()),
            notes: self.notes.filter(|n| !n.is_empty()),
        }
    }
}

fn parse_legacy_timestamp(raw: &str) -> Option<NaiveDateTime> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
}
