//! # Journal
//!
//! The local eco-journal: an ordered list of dated entries, newest
//! first, persisted as a JSON string under the `journal-entries` key.

use serde::{Deserialize, Serialize};

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// What the student wrote.
    pub text: String,
    /// Display date, as formatted at entry time.
    pub date: String,
}

/// The journal, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// An empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the front. Blank text is a no-op.
    ///
    /// Returns whether the entry was recorded.
    pub fn add(&mut self, text: &str, date: impl Into<String>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.insert(
            0,
            JournalEntry {
                text: text.to_string(),
                date: date.into(),
            },
        );
        true
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize for the `journal-entries` storage key.
    pub fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from the stored string. A corrupt value yields an empty
    /// journal rather than an error (nothing here is fatal).
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn add_prepends_newest_first() {
        let mut journal = Journal::new();
        assert!(journal.add("Planted a sapling", "2026-08-29"));
        assert!(journal.add("Used public transport", "2026-08-30"));

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries()[0].text, "Used public transport");
        assert_eq!(journal.entries()[1].text, "Planted a sapling");
    }

    #[test]
    fn blank_entry_is_noop() {
        let mut journal = Journal::new();
        assert!(!journal.add("   ", "2026-08-30"));
        assert!(journal.is_empty());
    }

    #[test]
    fn stored_round_trip() {
        let mut journal = Journal::new();
        journal.add("Composted food scraps", "2026-08-30");

        let raw = journal.to_stored().unwrap();
        assert_eq!(Journal::from_stored(&raw), journal);
    }

    #[test]
    fn corrupt_stored_value_yields_empty_journal() {
        assert!(Journal::from_stored("not json").is_empty());
        assert!(Journal::from_stored("{\"wrong\": 1}").is_empty());
    }
}
