//! Core library modules for trackscribe.
//!
//! ## Features
//!
//! - **Durations**: parsing and formatting of `SS`, `MM:SS` and `HH:MM:SS`
//! - **Billing**: monthly or fixed billing cycles and their totals
//! - **Timer**: the two-stage turnaround countdown and its ticker
//! - **Entries**: the owner's entry list, filters, sorting and legacy import
//! - **Infrastructure**: configuration, data storage, messaging, export
//!
//! ## Usage
//!
//! ```rust
//! use trackscribe::libs::duration::{format_compound, parse_duration};
//!
//! let seconds = parse_duration("1:02:03")?;
//! assert_eq!(format_compound(seconds), "1h 2m 3s");
//! # Ok::<(), trackscribe::libs::error::TrackError>(())
//! ```

pub mod aggregate;
pub mod billing;
pub mod book;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod error;
pub mod export;
pub mod messages;
pub mod navigation;
pub mod query;
pub mod store;
pub mod ticker;
pub mod timer;
pub mod view;
