//! User preference persistence.
//!
//! Preferences are a convenience: every store swallows its own failures and
//! reports them to the log, so callers never see an error.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use super::Database;

/// Key under which the last chosen convention is stored
pub const CONVENTION_PREFERENCE_KEY: &str = "bidquiz.convention";

/// Key-value storage for user preferences
pub trait PreferenceStore: Send + Sync {
    /// Previously saved value, or `None` if absent or storage is unavailable
    fn load(&self, key: &str) -> Option<String>;

    /// Save a value; failures are logged and otherwise ignored
    fn save(&self, key: &str, value: &str);
}

/// Preferences kept in the `preferences` table of the local database
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePreferenceStore {
    pub fn new(db: &Database) -> Self {
        Self {
            conn: db.connection(),
        }
    }

    fn get(&self, key: &str) -> rusqlite::Result<Option<String>> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
    }

    fn set(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read preference");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.set(key, value) {
            tracing::warn!(key, error = %e, "Failed to save preference");
        }
    }
}

/// In-process preferences, used when no database is available and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.lock().insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}
