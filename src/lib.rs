//! # TrackScribe
//!
//! Time tracking for transcription work: a ledger of audio files with their
//! durations, a billing-cycle overview, and a two-stage turnaround timer.
//!
//! ## Features
//!
//! - **Entries**: add, edit, delete, filter and sort transcription files
//! - **Billing Cycles**: monthly cycles from a start day, or a fixed range
//! - **TAT Timer**: First Review and Speaker Verification countdowns that
//!   record and complete an entry
//! - **Data Export**: CSV, JSON and Excel statements
//! - **Legacy Import**: loads older JSON records, filling in missing fields
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackscribe::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
