//! Database layer for trackscribe.
//!
//! A small SQLite persistence adapter: a connection type that applies the
//! versioned schema migrations on open, and the entries table behind the
//! [`EntryStore`](crate::libs::store::EntryStore) trait.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trackscribe::db::entries::Entries;
//! use trackscribe::libs::store::EntryStore;
//!
//! let entries = Entries::new()?;
//! let mine = entries.list("owner-id")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
///
/// Opens `trackscribe.db` in the data directory, an explicit path, or an
/// in-memory database, and runs migrations before handing it out.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Entries table: create, list per owner, partial update, delete.
pub mod entries;
