//! Database schema migrations.
//!
//! Every schema change is a numbered migration recorded in the `migrations`
//! table. Pending migrations run in order inside a single transaction when a
//! [`Db`](super::db::Db) is opened, so a database is either fully upgraded or
//! left untouched.
//!
//! ## Usage
//!
//! ```rust
//! use trackscribe::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracking table for applied migrations.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique, increasing version number
    version: u32,
    /// What the migration does
    name: &'static str,
    /// Applies the change inside the migration transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the entries table with the canonical duration column and
        // its cached decomposition
        self.add_migration(1, "create_entries_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS entries (
                    id INTEGER NOT NULL PRIMARY KEY,
                    owner_id TEXT NOT NULL,
                    file_name TEXT NOT NULL,
                    client TEXT NOT NULL DEFAULT '',
                    duration_seconds INTEGER NOT NULL DEFAULT 0 CHECK (duration_seconds >= 0),
                    hours INTEGER NOT NULL DEFAULT 0,
                    minutes INTEGER NOT NULL DEFAULT 0,
                    seconds INTEGER NOT NULL DEFAULT 0,
                    date DATE,
                    created_at TIMESTAMP NOT NULL,
                    status TEXT NOT NULL CHECK (status IN ('In Progress', 'Pending QA', 'Completed'))
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: optional link and notes per entry
        self.add_migration(2, "add_entry_link_and_notes", |tx| {
            tx.execute("ALTER TABLE entries ADD COLUMN link TEXT", [])?;
            tx.execute("ALTER TABLE entries ADD COLUMN notes TEXT", [])?;
            Ok(())
        });

        // Version 3: indices for owner listing, cycle totals and chart buckets
        self.add_migration(3, "add_entry_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_owner_created ON entries(owner_id, created_at)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_owner_date ON entries(owner_id, date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_status ON entries(status)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String)>> {
        let mut stmt = conn.prepare("SELECT version, name FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
