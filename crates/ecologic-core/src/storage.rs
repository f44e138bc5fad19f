//! # Durable Client Storage
//!
//! The string key-value store backing the two persistent client keys:
//! `language-preference` and `journal-entries`.
//!
//! Backed by redb for ACID writes and crash safety. Each key is read
//! once at startup and written on every mutating action. Missing or
//! corrupt values are a normal path that falls back to defaults.

use crate::error::CoreError;
use crate::i18n::Language;
use crate::journal::Journal;
use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;

/// Storage key for the selected interface language.
pub const KEY_LANGUAGE: &str = "language-preference";

/// Storage key for the serialized journal.
pub const KEY_JOURNAL: &str = "journal-entries";

const CLIENT_TABLE: TableDefinition<&str, &str> = TableDefinition::new("client-store");

/// The durable client store.
pub struct ClientStore {
    db: Database,
}

impl ClientStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let db = Database::create(path).map_err(|e| CoreError::Storage(e.to_string()))?;

        // Ensure the table exists so first reads don't error.
        let txn = db
            .begin_write()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        txn.open_table(CLIENT_TABLE)
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        txn.commit().map_err(|e| CoreError::Storage(e.to_string()))?;

        Ok(Self { db })
    }

    /// Read one string value.
    pub fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        let table = txn
            .open_table(CLIENT_TABLE)
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        let value = table
            .get(key)
            .map_err(|e| CoreError::Storage(e.to_string()))?
            .map(|guard| guard.value().to_string());
        Ok(value)
    }

    /// Write one string value (overwrites).
    pub fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        {
            let mut table = txn
                .open_table(CLIENT_TABLE)
                .map_err(|e| CoreError::Storage(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| CoreError::Storage(e.to_string()))?;
        }
        txn.commit().map_err(|e| CoreError::Storage(e.to_string()))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Typed accessors for the two client keys
    // -------------------------------------------------------------------------

    /// Load the saved language. Missing or unknown codes fall back to
    /// the default; storage errors do too (nothing here is fatal).
    #[must_use]
    pub fn load_language(&self) -> Language {
        self.get(KEY_LANGUAGE)
            .ok()
            .flatten()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    /// Persist the selected language.
    pub fn save_language(&self, language: Language) -> Result<(), CoreError> {
        self.set(KEY_LANGUAGE, language.code())
    }

    /// Load the journal. Missing or corrupt values yield an empty one.
    #[must_use]
    pub fn load_journal(&self) -> Journal {
        self.get(KEY_JOURNAL)
            .ok()
            .flatten()
            .map(|raw| Journal::from_stored(&raw))
            .unwrap_or_default()
    }

    /// Persist the journal after every mutation.
    pub fn save_journal(&self, journal: &Journal) -> Result<(), CoreError> {
        let raw = journal
            .to_stored()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        self.set(KEY_JOURNAL, &raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================
