//! Two-stage turn-around-time (TAT) timer.
//!
//! A file goes through First Review (FR), allotted half the audio length, and
//! then Speaker Verification (SV), allotted one and a half times the audio
//! length. Finishing FR creates an In Progress entry; finishing SV marks the
//! same entry Completed and resets the session.
//!
//! ```text
//!  Idle(FR) ──start──▶ Running(FR) ◀──toggle──▶ Paused(FR)
//!                          │ tick to 0
//!                          ▼
//!                     Expired(FR) ──finish_first_review──▶ Idle(SV) ...
//!  ... Running(SV) ⇄ Paused(SV) ──finish_speaker_verification──▶ Idle(FR)
//! ```
//!
//! Finishing a stage is allowed from any phase of that stage; expiry only
//! stops the countdown. Store failures leave the session exactly as it was.

use super::aggregate::generate_auto_name;
use super::duration::{is_full_hhmmss, parse_duration};
use super::entry::{EntryPatch, EntryStatus, NewEntry};
use super::error::{TrackError, TrackResult};
use super::store::EntryStore;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use tracing::debug;

pub const FIRST_REVIEW_NOTES: &str = "First Review Completed";
pub const SPEAKER_VERIFICATION_NOTES: &str = "Speaker Verification Completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FirstReview,
    SpeakerVerification,
}

impl Stage {
    /// Share of the audio length allotted to this stage.
    pub fn multiplier(&self) -> f64 {
        match self {
            Stage::FirstReview => 0.5,
            Stage::SpeakerVerification => 1.5,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Stage::FirstReview => "FR",
            Stage::SpeakerVerification => "SV",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::FirstReview => f.write_str("First Review"),
            Stage::SpeakerVerification => f.write_str("Speaker Verification"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown for the stage hit zero.
    Expired(Stage),
}

/// Entry details supplied when First Review is finished.
#[derive(Debug, Clone)]
pub struct FirstReviewDraft {
    pub owner_id: String,
    /// Left blank, an `"Unnamed File {n}"` name is generated.
    pub file_name: Option<String>,
    pub client: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub link: Option<String>,
}

/// Target seconds for `audio_seconds` of audio at `stage`.
pub fn stage_target(audio_seconds: u64, stage: Stage) -> u64 {
    (audio_seconds as f64 * stage.multiplier()).round() as u64
}

/// Parses an audio length that a session can be started with: the First
/// Review target must be at least one second.
pub fn parse_audio_duration(input: &str) -> TrackResult<u64> {
    let seconds = parse_duration(input)?;
    if stage_target(seconds, Stage::FirstReview) == 0 {
        return Err(TrackError::invalid_input(format!("audio length '{}' is too short to time", input)));
    }
    Ok(seconds)
}

#[derive(Debug, Clone)]
pub struct TimerSession {
    stage: Stage,
    audio_duration_seconds: u64,
    target_seconds: u64,
    remaining_seconds: u64,
    running: bool,
    expired: bool,
    linked_entry_id: Option<i64>,
    auto_start: bool,
}

impl Default for TimerSession {
    fn default() -> Self {
        TimerSession::new(false)
    }
}

impl TimerSession {
    pub fn new(auto_start: bool) -> Self {
        TimerSession {
            stage: Stage::FirstReview,
            audio_duration_seconds: 0,
            target_seconds: 0,
            remaining_seconds: 0,
            running: false,
            expired: false,
            linked_entry_id: None,
            auto_start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn audio_duration_seconds(&self) -> u64 {
        self.audio_duration_seconds
    }

    pub fn target_seconds(&self) -> u64 {
        self.target_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn linked_entry_id(&self) -> Option<i64> {
        self.linked_entry_id
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.expired {
            TimerPhase::Expired
        } else if self.remaining_seconds < self.target_seconds {
            TimerPhase::Paused
        } else {
            TimerPhase::Idle
        }
    }

    /// Sets the audio length from user input and recomputes the FR target.
    ///
    /// Only allowed during First Review while stopped. A complete `HH:MM:SS`
    /// value starts the countdown when auto-start is on.
    pub fn set_audio_duration(&mut self, input: &str) -> TrackResult<()> {
        if self.stage != Stage::FirstReview {
            return Err(TrackError::invalid_transition(
                "audio length is fixed once Speaker Verification has begun",
            ));
        }
        if self.running {
            return Err(TrackError::invalid_transition("pause the timer before changing the audio length"));
        }

        self.audio_duration_seconds = parse_duration(input)?;
        self.recompute_target();
        debug!(audio = self.audio_duration_seconds, target = self.target_seconds, "audio length set");

        if self.auto_start && is_full_hhmmss(input) && self.target_seconds > 0 {
            self.start()?;
        }
        Ok(())
    }

    fn recompute_target(&mut self) {
        self.target_seconds = stage_target(self.audio_duration_seconds, self.stage);
        if !self.running {
            self.remaining_seconds = self.target_seconds;
            self.expired = false;
        }
    }

    pub fn start(&mut self) -> TrackResult<()> {
        if self.target_seconds == 0 {
            return Err(TrackError::invalid_input("enter an audio length before starting the timer"));
        }
        if self.remaining_seconds == 0 {
            return Err(TrackError::invalid_transition(format!("{} time is already up", self.stage)));
        }
        self.running = true;
        debug!(stage = self.stage.short_name(), remaining = self.remaining_seconds, "timer started");
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            debug!(stage = self.stage.short_name(), remaining = self.remaining_seconds, "timer paused");
        }
    }

    pub fn toggle(&mut self) -> TrackResult<()> {
        if self.running {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Advances the countdown by one second. Does nothing while stopped.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            self.expired = true;
            debug!(stage = self.stage.short_name(), "stage time expired");
            return Some(TimerEvent::Expired(self.stage));
        }
        None
    }

    /// Records the First Review and moves on to Speaker Verification.
    ///
    /// Returns the id of the created entry.
    pub fn finish_first_review(&mut self, store: &mut dyn EntryStore, draft: FirstReviewDraft) -> TrackResult<i64> {
        if self.stage != Stage::FirstReview {
            return Err(TrackError::invalid_transition("First Review is already finished"));
        }
        if self.target_seconds == 0 {
            return Err(TrackError::invalid_input("no audio length entered"));
        }

        let file_name = match draft.file_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => generate_auto_name(&store.list(&draft.owner_id)?),
        };
        let mut new_entry = NewEntry::new(
            &draft.owner_id,
            &file_name,
            &draft.client,
            self.audio_duration_seconds,
            draft.date,
            draft.created_at,
        )
        .with_status(EntryStatus::InProgress)
        .with_notes(FIRST_REVIEW_NOTES);
        new_entry.link = draft.link.filter(|l| !l.is_empty());

        let created = store.create(&new_entry)?;
        debug!(id = created.id, name = %created.file_name, "first review recorded");

        self.linked_entry_id = Some(created.id);
        self.stage = Stage::SpeakerVerification;
        self.running = false;
        self.recompute_target();
        if self.auto_start && self.target_seconds > 0 {
            self.running = true;
        }
        Ok(created.id)
    }

    /// Marks the linked entry Completed and resets the session.
    pub fn finish_speaker_verification(&mut self, store: &mut dyn EntryStore) -> TrackResult<()> {
        if self.stage != Stage::SpeakerVerification {
            return Err(TrackError::invalid_transition("finish First Review first"));
        }
        let id = self
            .linked_entry_id
            .ok_or_else(|| TrackError::invalid_transition("no entry is linked to this session"))?;

        store.update(id, &EntryPatch::status(EntryStatus::Completed, SPEAKER_VERIFICATION_NOTES))?;
        debug!(id, "speaker verification recorded");

        *self = TimerSession::new(self.auto_start);
        Ok(())
    }
}
