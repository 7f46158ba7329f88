//! Local persistence.
//!
//! SQLite storage for user preferences, plus an in-memory fallback.

mod database;
mod migrations;
mod prefs;

pub use database::{Database, DatabaseError};
pub use prefs::{
    MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore, CONVENTION_PREFERENCE_KEY,
};
